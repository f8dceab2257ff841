/// Any object that can exist in an environment.
///
/// Everything has a label and a way to dump its state. A thing is alive only if it reports an
/// `alive` flag that is set; things without the flag are simply not alive.
pub trait Thing {
    /// Display label, defaults to the type name without its module path or generics.
    fn label(&self) -> String {
        short_type_name::<Self>().to_string()
    }

    /// `<label>`, the form used in trace output.
    fn repr(&self) -> String {
        format!("<{}>", self.label())
    }

    fn alive(&self) -> Option<bool> {
        None
    }

    fn is_alive(&self) -> bool {
        self.alive().unwrap_or(false)
    }

    fn show_state(&self) -> String {
        "I don't know how to show_state.".to_string()
    }
}

pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dirt;

    impl Thing for Dirt {}

    struct Wumpus {
        alive: bool,
    }

    impl Thing for Wumpus {
        fn alive(&self) -> Option<bool> {
            Some(self.alive)
        }
    }

    #[test]
    fn label_defaults_to_type_name() {
        assert_eq!(Dirt.label(), "Dirt");
        assert_eq!(Dirt.repr(), "<Dirt>");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
    }

    #[test]
    fn missing_alive_flag_means_not_alive() {
        assert!(!Dirt.is_alive());
        assert!(Wumpus { alive: true }.is_alive());
        assert!(!Wumpus { alive: false }.is_alive());
    }

    #[test]
    fn show_state_has_a_default() {
        assert_eq!(Dirt.show_state(), "I don't know how to show_state.");
    }
}

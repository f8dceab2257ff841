use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::AgentProgram;

/// Selects an action by looking up the entire percept sequence seen so far.
///
/// The history grows by one percept per call and is never reset, so the table must contain every
/// sequence the program is expected to handle. This is only practical for tiny domains: the number
/// of sequences grows exponentially with their length.
#[derive(Debug, Clone)]
pub struct TableDrivenProgram<P, A> {
    table: BTreeMap<Vec<P>, A>,
    percepts: Vec<P>,
}

impl<P, A> TableDrivenProgram<P, A>
where
    P: Ord,
{
    pub fn new(table: BTreeMap<Vec<P>, A>) -> Self {
        Self {
            table,
            percepts: Vec::new(),
        }
    }

    /// Percepts received so far, oldest first.
    pub fn percepts(&self) -> &[P] {
        &self.percepts
    }

    pub fn table(&self) -> &BTreeMap<Vec<P>, A> {
        &self.table
    }
}

impl<P, A> FromIterator<(Vec<P>, A)> for TableDrivenProgram<P, A>
where
    P: Ord,
{
    fn from_iter<T: IntoIterator<Item = (Vec<P>, A)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Returns `None` when the accumulated sequence has no entry in the table.
impl<P, A> AgentProgram<P, Option<A>> for TableDrivenProgram<P, A>
where
    P: Ord + Debug + 'static,
    A: Clone + 'static,
{
    fn run(&mut self, percept: P) -> Option<A> {
        self.percepts.push(percept);
        let action = self.table.get(self.percepts.as_slice()).cloned();
        if action.is_none() {
            tracing::debug!(sequence = ?self.percepts, "percept sequence not in table");
        }
        action
    }
}

/// One revision topic: the set of aliases that resolve to it, and the note
/// they resolve to.
///
/// The alias set is the topic's identity; within a store, alias sets are
/// pairwise disjoint (enforced at load).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub aliases: Vec<String>,
    pub note: String,
}

impl Topic {
    pub fn new(aliases: Vec<String>, note: String) -> Self {
        Self { aliases, note }
    }

    /// The comma-joined key this topic serializes under in `skills.json`.
    pub fn wire_key(&self) -> String {
        self.aliases.join(", ")
    }
}

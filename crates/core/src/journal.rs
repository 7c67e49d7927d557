use crate::types::Intent;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub intent: Intent,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: 1, seed, inputs: Vec::new() }
    }

    /// Appends `intent` with the next sequence number.
    pub fn append(&mut self, intent: Intent) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, intent });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    #[test]
    fn append_numbers_records_in_order() {
        let mut journal = InputJournal::new(9);
        journal.append(Intent::Wait);
        journal.append(Intent::MoveTo(Pos { y: 3, x: 4 }));

        let seqs: Vec<u64> = journal.inputs.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn journal_json_shape_is_stable() {
        let mut journal = InputJournal::new(1);
        journal.append(Intent::UsePotion);
        let json = serde_json::to_string(&journal).expect("serialize journal");
        assert_eq!(
            json,
            r#"{"format_version":1,"seed":1,"inputs":[{"seq":0,"intent":"UsePotion"}]}"#
        );
    }
}

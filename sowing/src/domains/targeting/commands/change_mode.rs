use crate::targeting::{Mode, Targeting, TargetingDomain};

impl TargetingDomain {
    pub fn change_mode(&mut self, mode: Mode) -> Vec<Targeting> {
        if self.mode == mode {
            return vec![];
        }
        self.mode = mode;
        vec![Targeting::ModeChanged { mode }]
    }
}

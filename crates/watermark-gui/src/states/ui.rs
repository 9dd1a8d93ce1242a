/// Messages shown in the status panel, oldest first.
#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

use jamaat_services::{DisplaySink, Slot};

/// Prints board updates to stdout
#[derive(Debug, Default)]
pub struct TerminalSink;

impl DisplaySink for TerminalSink {
    fn set_text(&self, slot: Slot, text: &str) {
        match slot {
            // once a second; too noisy for stdout
            Slot::CurrentTime => tracing::trace!("{}", text),
            _ => println!("{:>18}  {}", slot.id(), text),
        }
    }

    fn show_status(&self, message: &str) {
        println!(">> {}", message);
    }

    fn hide_status(&self) {
        tracing::trace!("Status banner hidden");
    }

    fn set_suggestions(&self, rows: &[String]) {
        for (i, row) in rows.iter().enumerate() {
            println!("  [{}] {}", i + 1, row);
        }
    }
}

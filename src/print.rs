//! Hand-off of the finished page to the platform print facility.
//!
//! Printing mutates global platform state (the document or window title, which
//! the print dialog uses as the default file name). [`TitleScope`] owns that
//! mutation: it swaps the title in and restores the previous one when dropped,
//! whichever way the print call exits.

use crate::constants;
use crate::error::Result;
use crate::types::MachineInfo;

/// Something with a user-visible title, such as a browser document or a window.
pub trait TitleHost {
    /// Current title.
    fn title(&self) -> String;
    /// Replaces the title.
    fn set_title(&mut self, title: &str);
}

/// A platform print facility.
pub trait PrintHost: TitleHost {
    /// Starts printing. Completion is not observed.
    fn print(&mut self) -> Result<()>;
}

/// Scoped title swap. The previous title comes back on drop.
pub struct TitleScope<'a, H: TitleHost + ?Sized> {
    host: &'a mut H,
    previous: String,
}

impl<'a, H: TitleHost + ?Sized> TitleScope<'a, H> {
    /// Saves the current title of `host` and sets `title`.
    pub fn new(host: &'a mut H, title: &str) -> Self {
        let previous = host.title();
        host.set_title(title);
        Self { host, previous }
    }

    /// The host, for use while the title is swapped.
    pub fn host(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: TitleHost + ?Sized> Drop for TitleScope<'_, H> {
    fn drop(&mut self) {
        self.host.set_title(&self.previous);
    }
}

/// Print button state: guards against re-entry and swallows failures.
#[derive(Debug, Default)]
pub struct PrintTrigger {
    is_printing: bool,
}

impl PrintTrigger {
    /// Creates an idle trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a print is in progress.
    pub fn is_printing(&self) -> bool {
        self.is_printing
    }

    /// Label of the print button for the current state.
    pub fn button_label(&self) -> &'static str {
        if self.is_printing {
            "Preparing..."
        } else {
            "Save as PDF"
        }
    }

    /// Prints through `host` with `title` swapped in for the duration.
    ///
    /// Does nothing while a print is already in progress. Failures are logged,
    /// never retried, and leave the trigger idle again.
    ///
    /// Returns whether a print was attempted.
    pub fn trigger<H: PrintHost + ?Sized>(&mut self, host: &mut H, title: &str) -> bool {
        if self.is_printing {
            return false;
        }
        self.is_printing = true;
        let result = {
            let mut scope = TitleScope::new(host, title);
            scope.host().print()
        };
        match result {
            Ok(()) => log::info!("Print started as \"{title}\""),
            Err(err) => log::error!("Error printing: {err}"),
        }
        self.is_printing = false;
        true
    }
}

/// Title used as the default file name of the printed page.
pub fn print_title(machine: &MachineInfo) -> String {
    let suffix = machine.machine_no.trim();
    let suffix = if suffix.is_empty() {
        constants::PRINT_TITLE_FALLBACK
    } else {
        suffix
    };
    format!("{}_{}", constants::PRINT_TITLE_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct FakeHost {
        title: String,
        titles_seen_by_print: Vec<String>,
        fail: bool,
    }

    impl TitleHost for FakeHost {
        fn title(&self) -> String {
            self.title.clone()
        }

        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }
    }

    impl PrintHost for FakeHost {
        fn print(&mut self) -> Result<()> {
            self.titles_seen_by_print.push(self.title.clone());
            if self.fail {
                Err(Error::Dom("print blocked".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_title_scope_restores_on_drop() {
        let mut host = FakeHost {
            title: "Feeder Configuration Tool".into(),
            ..Default::default()
        };
        {
            let mut scope = TitleScope::new(&mut host, "Feeder_Configuration_Report");
            assert_eq!(scope.host().title(), "Feeder_Configuration_Report");
        }
        assert_eq!(host.title, "Feeder Configuration Tool");
    }

    #[test]
    fn test_trigger_prints_under_swapped_title_and_restores() {
        let mut host = FakeHost {
            title: "Original".into(),
            ..Default::default()
        };
        let mut trigger = PrintTrigger::new();

        assert!(trigger.trigger(&mut host, "Feeder_Configuration_FM-1"));

        assert_eq!(host.titles_seen_by_print, vec!["Feeder_Configuration_FM-1"]);
        assert_eq!(host.title, "Original");
        assert!(!trigger.is_printing());
        assert_eq!(trigger.button_label(), "Save as PDF");
    }

    #[test]
    fn test_failed_print_restores_title_and_resets_flag() {
        let mut host = FakeHost {
            title: "Original".into(),
            fail: true,
            ..Default::default()
        };
        let mut trigger = PrintTrigger::new();

        assert!(trigger.trigger(&mut host, "Feeder_Configuration_Report"));

        assert_eq!(host.titles_seen_by_print.len(), 1);
        assert_eq!(host.title, "Original");
        assert!(!trigger.is_printing());
    }

    #[test]
    fn test_trigger_is_ignored_while_printing() {
        let mut host = FakeHost::default();
        let mut trigger = PrintTrigger { is_printing: true };

        assert!(!trigger.trigger(&mut host, "Feeder_Configuration_Report"));
        assert!(host.titles_seen_by_print.is_empty());
        assert_eq!(trigger.button_label(), "Preparing...");
    }

    #[test]
    fn test_print_title_uses_machine_number_or_fallback() {
        let mut machine = MachineInfo::default();
        assert_eq!(print_title(&machine), "Feeder_Configuration_Report");
        machine.machine_no = " FM-204 ".into();
        assert_eq!(print_title(&machine), "Feeder_Configuration_FM-204");
    }
}

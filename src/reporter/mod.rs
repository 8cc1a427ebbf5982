use crate::cleaner::CleanupStats;
use std::io::{self, Write};

pub trait Reporter {
    fn report(&self, stats: &CleanupStats) -> io::Result<()>;
}

pub struct CliReporter;

impl Reporter for CliReporter {
    fn report(&self, stats: &CleanupStats) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "\n🧹 Scrub Cleanup Report\n")?;

        writeln!(handle, "  🗑  Debug calls removed: {}", stats.console_logs_removed)?;
        writeln!(handle, "  🎨 CSS classes removed:  {}", stats.css_classes_removed)?;
        writeln!(handle, "  📄 Files modified:       {}", stats.files_processed)?;
        writeln!(handle)?;

        if !stats.warnings.is_empty() {
            writeln!(handle, "⚠️  Warnings ({})", stats.warnings.len())?;
            writeln!(handle, "────────────────────────────────")?;
            for warning in &stats.warnings {
                writeln!(handle, "  • [{}] {}", warning.code, warning.message)?;
            }
            writeln!(handle)?;
        }

        if !stats.errors.is_empty() {
            writeln!(handle, "❌ Errors ({})", stats.errors.len())?;
            writeln!(handle, "────────────────────────────────")?;
            for error in &stats.errors {
                writeln!(handle, "  • [{}] {}", error.code, error.message)?;
            }
            writeln!(handle)?;
        }

        if stats.files_processed == 0 && stats.errors.is_empty() {
            writeln!(handle, "✅ Nothing to clean. Sources are already tidy.\n")?;
        }

        Ok(())
    }
}

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn report(&self, stats: &CleanupStats) -> io::Result<()> {
        let json = serde_json::to_string_pretty(stats)?;
        println!("{}", json);
        Ok(())
    }
}

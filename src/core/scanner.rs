// src/core/scanner.rs

//! The scan "analysis" simulation. Progress ticks from 0 to 100 in fixed
//! increments on a fixed interval, then the single mock verdict is revealed;
//! the selected image is never inspected.

use crate::core::knowledge_base::MOCK_SCAN_RESULT;
use crate::core::models::ScanResult;
use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Progress gained per simulation step.
pub const PROGRESS_STEP: u8 = 5;
/// Pause between steps. 20 steps of 5 make the whole scan take ~2 seconds.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// The percentages a scan passes through, ending exactly at 100.
pub fn progress_steps() -> impl Iterator<Item = u8> {
    (1..=100 / PROGRESS_STEP).map(|step| step * PROGRESS_STEP)
}

/// The verdict every scan reveals.
pub fn analysis_result() -> &'static ScanResult {
    &MOCK_SCAN_RESULT
}

/// Writes the result record as pretty-printed JSON into `dir` and returns
/// the path of the written file. The only genuine I/O failure path in the
/// application; the caller surfaces it as an export status, not an error
/// screen.
pub fn export_result(result: &ScanResult, dir: &Path) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let filename = format!("scan-report-{}.json", Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(filename);
    let json = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_terminates_at_exactly_one_hundred() {
        let steps: Vec<u8> = progress_steps().collect();
        assert_eq!(steps.len(), 20);
        assert_eq!(steps.first(), Some(&5));
        assert_eq!(steps.last(), Some(&100));
        assert!(steps.windows(2).all(|w| w[1] - w[0] == PROGRESS_STEP));
    }

    #[test]
    fn analysis_is_the_constant_mock_record() {
        let result = analysis_result();
        assert_eq!(result.disease, "Diabetic Retinopathy");
        assert_eq!(result.confidence_pct, 87);
        assert_eq!(result.symptoms.len(), 4);
        assert_eq!(result.prevention.len(), 4);
        assert_eq!(result.treatment.len(), 4);
    }

    #[test]
    fn export_writes_a_readable_report() {
        let dir = std::env::temp_dir().join("sio-eyecare-export-test");
        let path = export_result(analysis_result(), &dir).expect("export failed");
        let written = std::fs::read_to_string(&path).expect("report unreadable");
        assert!(written.contains("Diabetic Retinopathy"));
        assert!(written.contains("\"confidence_pct\": 87"));
        let _ = std::fs::remove_file(&path);
    }
}

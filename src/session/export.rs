//! Plain-text transcript of a session.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;

use super::model::Session;
use crate::fs::atomic_write;

/// Closing line of every exported transcript.
pub const EXPORT_FOOTER: &str = "Translated by Warmly - Privacy-First Translation";

/// Renders the session as a plain-text transcript.
///
/// Timestamps are shown in the time zone of `exported_at`.
pub fn render_transcript<Tz>(session: &Session, exported_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = exported_at.timezone();
    let pair = session.language_pair();

    let body = session
        .exchanges()
        .iter()
        .map(|exchange| {
            format!(
                "[{}]\n{}\n{}\n",
                exchange.created_at().with_timezone(&tz).format("%H:%M:%S"),
                exchange.original_text(),
                exchange.translated_text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Translation Session - {}\n\
         Language Pair: {} ↔ {}\n\
         \n\
         {body}\n\
         ---\n\
         {EXPORT_FOOTER}",
        exported_at.format("%Y-%m-%d"),
        pair.source_language,
        pair.target_language,
    )
}

/// Default file name for an export, e.g. `translation-1700000000000.txt`.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("translation-{}.txt", now.timestamp_millis())
}

/// Where an exported transcript was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

/// Writes `transcript` to `output`, or to stdout when `output` is `-`.
///
/// Without an explicit output the file is named by [`export_file_name`]
/// in the current directory.
pub fn write_transcript(
    transcript: &str,
    output: Option<&str>,
    now: DateTime<Utc>,
) -> Result<ExportTarget> {
    match output {
        Some("-") => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{transcript}").context("Failed to write transcript")?;
            stdout.flush().context("Failed to write transcript")?;
            Ok(ExportTarget::Stdout)
        }
        _ => {
            let path = output.map_or_else(|| PathBuf::from(export_file_name(now)), PathBuf::from);
            atomic_write(&path, transcript)?;
            Ok(ExportTarget::File(path))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::model::Exchange;
    use crate::translation::{LanguagePair, TranslationOutcome, find_pair};
    use chrono::TimeDelta;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    fn record(session: &mut Session, text: &str, at: DateTime<Utc>, outcome: &TranslationOutcome) {
        let mut exchange = Exchange::pending(session.next_id(at), text.to_string(), at);
        exchange.resolve(outcome);
        session.push_resolved(exchange);
    }

    #[test]
    fn test_render_transcript() {
        let mut session = Session::new(start(), LanguagePair::default());
        record(
            &mut session,
            "I miss you",
            start(),
            &TranslationOutcome::Translated("میں تمہیں یاد کرتا ہوں".to_string()),
        );
        record(
            &mut session,
            "Good night",
            start() + TimeDelta::minutes(5),
            &TranslationOutcome::Failed,
        );

        let transcript = render_transcript(&session, &(start() + TimeDelta::hours(1)));

        assert_eq!(
            transcript,
            "Translation Session - 2025-03-14\n\
             Language Pair: English ↔ Urdu\n\
             \n\
             [09:30:00]\n\
             I miss you\n\
             میں تمہیں یاد کرتا ہوں\n\
             \n\
             [09:35:00]\n\
             Good night\n\
             Translation error - please try again\n\
             \n\
             ---\n\
             Translated by Warmly - Privacy-First Translation"
        );
    }

    #[test]
    fn test_render_empty_transcript_keeps_header_and_footer() {
        let session = Session::new(start(), find_pair("fr").unwrap());

        let transcript = render_transcript(&session, &start());

        assert!(transcript.starts_with("Translation Session - 2025-03-14\nLanguage Pair: English ↔ French\n"));
        assert!(transcript.ends_with(EXPORT_FOOTER));
    }

    #[test]
    fn test_timestamps_follow_export_time_zone() {
        let mut session = Session::new(start(), LanguagePair::default());
        record(
            &mut session,
            "Hi",
            start(),
            &TranslationOutcome::Translated("Salaam".to_string()),
        );
        let karachi = chrono::FixedOffset::east_opt(5 * 3600).unwrap();

        let transcript = render_transcript(&session, &start().with_timezone(&karachi));

        assert!(transcript.contains("[14:30:00]"));
    }

    #[test]
    fn test_write_transcript_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("session.txt");

        let target =
            write_transcript("transcript", Some(path.to_str().unwrap()), start()).unwrap();

        assert_eq!(target, ExportTarget::File(path.clone()));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "transcript");
    }

    #[test]
    fn test_export_file_name() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(export_file_name(now), "translation-1700000000123.txt");
    }
}

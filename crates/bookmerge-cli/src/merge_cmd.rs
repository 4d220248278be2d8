//! `bookmerge <files>` — parse, dedup, and merge bookmark exports.

use crate::output::{self, Styled};
use anyhow::{Context, Result};
use bookmerge::MergeSession;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::warn;

/// A completed file read, successful or not.
struct LoadedFile {
    name: String,
    text: std::io::Result<String>,
}

/// Run the merge command.
pub async fn run(files: &[PathBuf], output_path: &Path, assume_yes: bool) -> Result<()> {
    let s = Styled::new();
    let mut session = MergeSession::new();

    // One reader task per file. Completions arrive in whatever order the
    // reads finish; the receive loop below is the only session mutator, so
    // within a file extraction and ingest stay ordered while the first
    // arrival of a URL, from any file, wins.
    let (tx, mut rx) = mpsc::channel::<LoadedFile>(16);
    for path in files {
        let tx = tx.clone();
        let path = path.clone();
        tokio::spawn(async move {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let text = tokio::fs::read_to_string(&path).await;
            let _ = tx.send(LoadedFile { name, text }).await;
        });
    }
    drop(tx);

    let mut reports = Vec::new();
    let mut skipped: Vec<(String, String)> = Vec::new();

    while let Some(file) = rx.recv().await {
        let html = match file.text {
            Ok(html) => html,
            Err(e) => {
                // A failed read is never followed by an ingest.
                warn!(file = %file.name, error = %e, "read failed");
                if !output::is_quiet() && !output::is_json() {
                    eprintln!("  {} {}: {e}", s.fail_sym(), file.name);
                }
                skipped.push((file.name, e.to_string()));
                continue;
            }
        };

        match session.ingest_file(&file.name, &html) {
            Ok(report) => {
                if !output::is_quiet() && !output::is_json() {
                    eprintln!(
                        "  {} {}: {} link(s) found, {} new, {} duplicate",
                        s.ok_sym(),
                        report.file,
                        report.found,
                        report.accepted,
                        report.duplicates
                    );
                }
                reports.push(report);
            }
            Err(e) => {
                if !output::is_quiet() && !output::is_json() {
                    eprintln!("  {} {e}", s.fail_sym());
                }
                skipped.push((file.name, e.to_string()));
            }
        }
    }

    if session.store().is_empty() {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "merged": false,
                "reason": "no_links",
                "skipped": skipped_json(&skipped),
            }));
        } else if !output::is_quiet() {
            eprintln!();
            eprintln!("  {} Nothing to merge.", s.warn_sym());
        }
        return Ok(());
    }

    print_group_summary(&s, &session);

    let groups = session.store().group_count();
    let links = session.store().link_count();

    if !assume_yes {
        let prompt = format!(
            "Merge {groups} bookmark group(s) into {}?",
            output_path.display()
        );
        if !confirm(&prompt)? {
            if !output::is_quiet() && !output::is_json() {
                eprintln!("  Aborted, nothing written.");
            }
            return Ok(());
        }
    }

    let document = session.render();
    tokio::fs::write(output_path, &document)
        .await
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "merged": true,
            "output": output_path.display().to_string(),
            "groups": groups,
            "links": links,
            "files": reports
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "file": r.file,
                        "found": r.found,
                        "accepted": r.accepted,
                        "duplicates": r.duplicates,
                    })
                })
                .collect::<Vec<_>>(),
            "skipped": skipped_json(&skipped),
        }));
    } else if !output::is_quiet() {
        eprintln!();
        eprintln!(
            "  {} Merged {links} link(s) in {groups} group(s) into {}.",
            s.ok_sym(),
            output_path.display()
        );
    }

    Ok(())
}

/// List each group with its link count (URLs too, when verbose).
fn print_group_summary(s: &Styled, session: &MergeSession) {
    if output::is_quiet() || output::is_json() {
        return;
    }

    eprintln!();
    eprintln!("  {}", s.bold("Parsed bookmarks"));
    for (label, urls) in session.store().groups() {
        let shown = if label.is_empty() { "(no label)" } else { label };
        eprintln!("    {:<32} {:>5}", shown, urls.len());
        if output::is_verbose() {
            for url in urls {
                eprintln!("      {}", s.dim(url));
            }
        }
    }
    eprintln!();
}

/// Ask for confirmation on stderr; only an explicit yes proceeds.
fn confirm(prompt: &str) -> Result<bool> {
    eprint!("  {prompt} [y/N] ");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read confirmation")?;
    Ok(parse_confirmation(&line))
}

fn parse_confirmation(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn skipped_json(skipped: &[(String, String)]) -> Vec<serde_json::Value> {
    skipped
        .iter()
        .map(|(file, reason)| serde_json::json!({ "file": file, "reason": reason }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmerge::extract_links;
    use std::fs;

    #[test]
    fn test_parse_confirmation() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation("  YES \n"));
        assert!(!parse_confirmation("\n"));
        assert!(!parse_confirmation("n\n"));
        assert!(!parse_confirmation("yep\n"));
    }

    #[tokio::test]
    async fn test_merges_two_files_with_cross_file_dedup() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.html");
        let b = dir.path().join("b.html");
        let out = dir.path().join("merged.html");

        fs::write(
            &a,
            r#"<a href="https://a.com">Docs</a><a href="https://b.com">Docs</a>"#,
        )
        .unwrap();
        fs::write(
            &b,
            r#"<a href="https://a.com">News</a><a href="https://c.com">News</a>"#,
        )
        .unwrap();

        run(&[a, b], &out, true).await.unwrap();

        let entries = extract_links(&fs::read_to_string(&out).unwrap());
        let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(entries.len(), 3);
        assert!(urls.contains(&"https://a.com"));
        assert!(urls.contains(&"https://b.com"));
        assert!(urls.contains(&"https://c.com"));
        // https://a.com survives exactly once, whichever file won the race.
        assert_eq!(urls.iter().filter(|u| **u == "https://a.com").count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_file_type_does_not_abort_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.html");
        let bad = dir.path().join("notes.txt");
        let out = dir.path().join("merged.html");

        fs::write(&good, r#"<a href="https://a.com">Docs</a>"#).unwrap();
        fs::write(&bad, "just some text").unwrap();

        run(&[bad, good], &out, true).await.unwrap();

        let entries = extract_links(&fs::read_to_string(&out).unwrap());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://a.com");
    }

    #[tokio::test]
    async fn test_unreadable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.html");
        let missing = dir.path().join("missing.html");
        let out = dir.path().join("merged.html");

        fs::write(&good, r#"<a href="https://a.com">Docs</a>"#).unwrap();

        run(&[missing, good], &out, true).await.unwrap();

        let entries = extract_links(&fs::read_to_string(&out).unwrap());
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_no_links_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.html");
        let out = dir.path().join("merged.html");

        fs::write(&empty, "<html><body>no anchors</body></html>").unwrap();

        run(&[empty], &out, true).await.unwrap();

        assert!(!out.exists());
    }
}

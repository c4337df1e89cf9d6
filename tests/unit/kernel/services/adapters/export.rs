use super::*;
use crate::kernel::corpus::{Corpus, CorpusScope};
use crate::kernel::matcher::{search, MatchMode};
use crate::kernel::services::ports::corpus::{ChapterRecord, RawVerse};

fn corpus() -> Corpus {
    Corpus::from_chapters(
        CorpusScope::Whole,
        vec![ChapterRecord::new(
            1,
            "الفاتحة",
            vec![
                RawVerse::new(1, "بِسْمِ اللَّهِ"),
                RawVerse::new(2, "الْحَمْدُ\tلِلَّهِ\nرَبِّ"),
            ],
        )],
    )
}

#[test]
fn test_tsv_export_has_header_and_flattened_fields() {
    let corpus = corpus();
    let hits = search(&corpus, "", MatchMode::Multiset);
    let mut out = Vec::new();
    TsvExporter.export(&hits, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], TSV_HEADER);
    assert_eq!(lines[1], "1\tالفاتحة\t1\tبِسْمِ اللَّهِ");
    assert_eq!(lines[2], "1\tالفاتحة\t2\tالْحَمْدُ لِلَّهِ رَبِّ");
}

#[test]
fn test_json_export_rows() {
    let corpus = corpus();
    let hits = search(&corpus, "سم", MatchMode::Multiset);
    let mut out = Vec::new();
    JsonExporter::default().export(&hits, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["chapter_id"], 1);
    assert_eq!(rows[0]["verse_number"], 1);
    assert_eq!(rows[0]["chapter_name"], "الفاتحة");
}

#[test]
fn test_exporter_for_format() {
    assert_eq!(exporter_for(ExportFormat::Json).format(), ExportFormat::Json);
    assert_eq!(exporter_for(ExportFormat::Tsv).format(), ExportFormat::Tsv);
    assert_eq!(ExportFormat::from_name("TSV"), Some(ExportFormat::Tsv));
    assert_eq!(ExportFormat::from_name("xlsx"), None);
}

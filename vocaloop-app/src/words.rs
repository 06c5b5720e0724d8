use anyhow::{bail, Context, Result};
use std::path::Path;
use vocaloop_core::Word;

/// Load a word catalog from a local file. CSV rows are
/// `id,text,meaning[,priority]`; JSON is an array of word objects.
pub fn load_words(path: &Path) -> Result<Vec<Word>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!(
            "unsupported word file (expected .csv or .json): {}",
            path.display()
        ),
    }
}

fn load_json(path: &Path) -> Result<Vec<Word>> {
    let data =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let words: Vec<Word> = serde_json::from_str(&data)?;
    Ok(words)
}

fn load_csv(path: &Path) -> Result<Vec<Word>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut words = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id: i64 = rec
            .get(0)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("bad word id in {}", path.display()))?;
        let text = rec.get(1).unwrap_or("").to_string();
        let meaning = rec.get(2).unwrap_or("").to_string();
        let priority: i32 = rec
            .get(3)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
            .with_context(|| format!("bad priority in {}", path.display()))?
            .unwrap_or(0);
        words.push(Word::new(id, text, meaning).with_priority(priority));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_csv_with_and_without_priority() {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(f, "id,text,meaning,priority").unwrap();
        writeln!(f, "1,apple,a fruit,5").unwrap();
        writeln!(f, "2,run,to move fast,").unwrap();
        f.flush().unwrap();

        let words = load_words(f.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].priority, 5);
        assert_eq!(words[1].priority, 0);
        assert_eq!(words[1].meaning, "to move fast");
    }

    #[test]
    fn loads_json_array() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            f,
            r#"[{{"id":1,"text":"apple","meaning":"a fruit"}},
                {{"id":2,"text":"run","meaning":"to move fast","priority":2}}]"#
        )
        .unwrap();
        f.flush().unwrap();

        let words = load_words(f.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].priority, 0);
        assert_eq!(words[1].priority, 2);
    }

    #[test]
    fn rejects_unknown_extension() {
        assert!(load_words(Path::new("words.txt")).is_err());
    }
}

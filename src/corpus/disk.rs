use super::Item;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// read a category file: a JSON list of items
pub fn load(path: &Path) -> anyhow::Result<Vec<Item>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading category {}", path.display()))?;
    let items = serde_json::from_str::<Vec<Item>>(&text)
        .with_context(|| format!("parsing category {}", path.display()))?;
    log::info!("loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// write pretty JSON with four-space indentation
pub fn save<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let text = render(value)?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("saved {}", path.display());
    Ok(())
}

pub fn render<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("serializing to JSON")?;
    String::from_utf8(buffer).context("serialized JSON is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Pass;
    use crate::fixtures;
    use serde_json::json;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bimatrix-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn indentation() {
        let text = render(&json!({"Total": 1})).unwrap();
        assert_eq!(text, "{\n    \"Total\": 1\n}");
    }

    #[test]
    fn roundtrip() {
        let path = scratch("roundtrip");
        let items = vec![
            Item::new("Owls hunt.", "An owl meets a mouse.", json!({"Owl": "Stay"}))
                .refine(Pass::new(fixtures::indifferent())),
        ];
        save(&path, &items).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, items);
    }

    #[test]
    fn unreadable() {
        let path = scratch("unreadable");
        std::fs::write(&path, "{not json").unwrap();
        let error = load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(format!("{:#}", error).contains("parsing category"));
        assert!(load(&scratch("missing")).is_err());
    }
}

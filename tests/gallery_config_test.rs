//! Gallery loading from TOML and JSON files.

use std::fs;

use tempfile::TempDir;

use ascii_patterns::errors::Result;
use ascii_patterns::{Gallery, GalleryEntry, PatternError, PatternSpec};

const GALLERY_TOML: &str = r#"
[[entries]]
title = "Tiny Triangle"
pattern = { kind = "triangle", size = 2 }

[[entries]]
title = "Broken Swastik"
pattern = { kind = "swastik", size = 4 }

[[entries]]
title = "Hollow Box"
pattern = { kind = "rectangle", height = 3, width = 3, hollow = true }

[[entries]]
title = "Sideways Pyramid"
pattern = { kind = "half_pyramid", height = 2, variant = "sideways" }
"#;

#[test]
fn test_load_toml_gallery() -> Result<()> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gallery.toml");
    fs::write(&path, GALLERY_TOML).expect("Failed to write gallery");

    let gallery = Gallery::load(&path)?;
    assert_eq!(gallery.entries.len(), 4);
    assert_eq!(
        gallery.entries[2].pattern,
        PatternSpec::Rectangle {
            height: 3,
            width: 3,
            hollow: true
        }
    );

    let rendered = gallery.render();
    assert_eq!(rendered[0].result.as_deref(), Ok("* \n* * \n"));
    assert!(matches!(
        rendered[1].result,
        Err(PatternError::InvalidParameter { .. })
    ));
    assert_eq!(rendered[2].result.as_deref(), Ok("* * *\n*   *\n* * *\n"));
    assert!(matches!(
        rendered[3].result,
        Err(PatternError::UnsupportedVariant(_))
    ));
    Ok(())
}

#[test]
fn test_load_json_gallery() -> Result<()> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gallery.json");
    fs::write(
        &path,
        r#"{"entries":[{"title":"Wave","pattern":{"kind":"wave","length":12,"amplitude":1,"frequency":1}}]}"#,
    )
    .expect("Failed to write gallery");

    let gallery = Gallery::load(&path)?;
    assert_eq!(
        gallery.entries,
        vec![GalleryEntry::new(
            "Wave",
            PatternSpec::Wave {
                length: 12,
                amplitude: 1,
                frequency: 1
            }
        )]
    );
    let out = gallery.render().remove(0).result?;
    assert_eq!(out.lines().count(), 3);
    Ok(())
}

#[test]
fn test_saved_showcase_loads_back() -> Result<()> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("showcase.toml");
    let showcase = Gallery::default_showcase();
    fs::write(&path, showcase.to_toml()?).expect("Failed to write gallery");

    assert_eq!(Gallery::load(&path)?, showcase);
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = Gallery::load(&temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, PatternError::Config(_)));
    assert!(!err.is_parameter_error());
}

#[test]
fn test_unknown_kind_is_config_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bad.toml");
    fs::write(
        &path,
        "[[entries]]\ntitle = \"Mystery\"\npattern = { kind = \"hexahedron\", size = 3 }\n",
    )
    .expect("Failed to write gallery");

    let err = Gallery::load(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid TOML gallery"));
}

#[test]
fn test_explicit_path_wins() -> Result<()> {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("one.json");
    fs::write(
        &path,
        r#"{"entries":[{"title":"Only","pattern":{"kind":"kite","size":2}}]}"#,
    )
    .expect("Failed to write gallery");

    let gallery = Gallery::load_or_default(Some(&path))?;
    let titles: Vec<&str> = gallery.titles().collect();
    assert_eq!(titles, vec!["Only"]);
    Ok(())
}

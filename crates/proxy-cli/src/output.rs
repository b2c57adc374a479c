//! Output-path handling.

use std::path::PathBuf;

/// Force a `.pdf` extension on the output path, case-insensitively.
pub fn ensure_pdf_extension(path: PathBuf) -> PathBuf {
    let has_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if has_pdf {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".pdf");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_pdf_when_missing() {
        assert_eq!(
            ensure_pdf_extension(PathBuf::from("my_proxies")),
            PathBuf::from("my_proxies.pdf")
        );
    }

    #[test]
    fn keeps_existing_pdf_extension() {
        assert_eq!(
            ensure_pdf_extension(PathBuf::from("deck.pdf")),
            PathBuf::from("deck.pdf")
        );
        assert_eq!(
            ensure_pdf_extension(PathBuf::from("deck.PDF")),
            PathBuf::from("deck.PDF")
        );
    }

    #[test]
    fn other_extensions_still_get_pdf_appended() {
        assert_eq!(
            ensure_pdf_extension(PathBuf::from("deck.v2")),
            PathBuf::from("deck.v2.pdf")
        );
    }
}

//! Document assembly and output.

use std::path::Path;

use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::layout::centering_margins;
use crate::options::SheetOptions;
use crate::render::{CellImage, page_ops};
use crate::types::{CardImage, GuideStyle};
use crate::{LayoutError, Result};

/// Build the paginated proxy-sheet document.
///
/// `deck` holds one decoded copy of every distinct card; `sequence` is the
/// print order as indices into it, with duplicates simply repeated. Each
/// deck entry is registered as a single XObject no matter how many cells
/// reference it.
///
/// Pages are created by chunking the sequence by grid capacity, so an empty
/// sequence is an error rather than a blank page, and a partially filled
/// last page is never followed by a trailing blank one.
fn build_document(
    deck: &[CardImage],
    sequence: &[usize],
    options: &SheetOptions,
    style: GuideStyle,
) -> Result<PdfDocument> {
    if sequence.is_empty() {
        return Err(LayoutError::EmptyDeck);
    }
    if let Some(&bad) = sequence.iter().find(|&&index| index >= deck.len()) {
        return Err(LayoutError::Config(format!(
            "Sequence references card {bad} but the deck holds {}",
            deck.len()
        )));
    }

    let margins = centering_margins(options)?;

    let mut doc = PdfDocument::new("Card Proxies");
    let registered: Vec<CellImage> = deck
        .iter()
        .map(|card| CellImage {
            xobject: doc.add_image(&card.image),
            width_px: card.width_px(),
            height_px: card.height_px(),
        })
        .collect();

    doc.pages = sequence
        .chunks(options.capacity())
        .map(|chunk| {
            let cells: Vec<CellImage> = chunk.iter().map(|&index| registered[index].clone()).collect();
            PdfPage::new(
                Mm(options.page_width_mm),
                Mm(options.page_height_mm),
                page_ops(&cells, options, margins, style),
            )
        })
        .collect();

    Ok(doc)
}

/// Render the proxy sheet PDF to bytes.
pub fn render_deck_bytes(
    deck: &[CardImage],
    sequence: &[usize],
    options: &SheetOptions,
    style: GuideStyle,
) -> Result<Vec<u8>> {
    let mut doc = build_document(deck, sequence, options, style)?;
    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// Render the proxy sheet PDF and write it to `output_path`.
pub async fn generate_pdf(
    deck: &[CardImage],
    sequence: &[usize],
    options: &SheetOptions,
    style: GuideStyle,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let deck = deck.to_vec();
    let sequence = sequence.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || render_deck_bytes(&deck, &sequence, &options, style))
            .await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::Op;
    use std::io::Cursor;

    fn test_card(name: &str) -> CardImage {
        let pixels = image::RgbImage::from_pixel(4, 6, image::Rgb([120, 40, 200]));
        let mut bytes = Cursor::new(Vec::new());
        pixels.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        CardImage::decode(name, bytes.get_ref()).unwrap()
    }

    fn identity(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn ten_cards_make_two_pages() {
        let deck: Vec<_> = (0..10).map(|i| test_card(&format!("card{i}.png"))).collect();
        let options = SheetOptions::with_cut_gaps();

        let doc =
            build_document(&deck, &identity(10), &options, GuideStyle::CropMarks).unwrap();
        assert_eq!(doc.pages.len(), 2);

        let last_page_images = doc.pages[1]
            .ops
            .iter()
            .filter(|op| matches!(op, Op::UseXobject { .. }))
            .count();
        assert_eq!(last_page_images, 1);
    }

    #[test]
    fn a_full_page_has_no_trailing_blank_page() {
        let deck: Vec<_> = (0..9).map(|i| test_card(&format!("card{i}.png"))).collect();
        let options = SheetOptions::default();

        let doc =
            build_document(&deck, &identity(9), &options, GuideStyle::DashedOutline).unwrap();
        assert_eq!(doc.pages.len(), 1);
    }

    #[test]
    fn empty_sequence_is_an_error_not_a_blank_page() {
        let deck = vec![test_card("lonely.png")];
        let options = SheetOptions::default();

        let result = build_document(&deck, &[], &options, GuideStyle::CropMarks);
        assert!(matches!(result, Err(LayoutError::EmptyDeck)));
    }

    #[test]
    fn duplicate_indices_reuse_one_xobject() {
        let deck = vec![test_card("forest.png")];
        let options = SheetOptions::default();

        let doc =
            build_document(&deck, &[0, 0, 0], &options, GuideStyle::CropMarks).unwrap();
        assert_eq!(doc.pages.len(), 1);

        let ids: Vec<_> = doc.pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::UseXobject { id, .. } => Some(id.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| *id == ids[0]));
    }

    #[test]
    fn out_of_range_sequence_index_is_rejected() {
        let deck = vec![test_card("forest.png")];
        let options = SheetOptions::default();

        let result = build_document(&deck, &[0, 3], &options, GuideStyle::CropMarks);
        assert!(matches!(result, Err(LayoutError::Config(_))));
    }

    #[tokio::test]
    async fn generate_pdf_writes_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proxies.pdf");
        let deck = vec![test_card("island.png")];
        let options = SheetOptions::with_cut_gaps();

        generate_pdf(&deck, &[0], &options, GuideStyle::CropMarks, &path)
            .await
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

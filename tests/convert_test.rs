//! Integration tests for the conversion pipeline.

use unofd::model::{LayerKind, LineHeight, PageSize, TextStyle};
use unofd::ofd::{
    CommonData, DocBody, DocInfo, Document, ImageObject, Layer, LayerRole, Ofd, Page, PageArea,
    PageBlock, PathObject, StBox, TextObject,
};
use unofd::{
    convert, convert_json_str, convert_with_options, mm_to_pixel, pixel_to_mm, ConvertOptions, Error, ObjectError,
    OfdConverter,
};

fn text(x: f64, y: f64, w: f64, h: f64, content: &str) -> TextObject {
    TextObject::new(StBox::new(x, y, w, h), 3.0, content)
}

fn ofd_with(document: Document) -> Ofd {
    let mut ofd = Ofd::new("1.0", "OFD");
    ofd.add_body(DocBody::new(DocInfo::with_title("Sample"), document));
    ofd
}

/// Two pages: the first with an explicit area and mixed layers, the second bare.
fn sample_ofd() -> Ofd {
    let mut first = Page::with_area(100.0, 150.0);
    first.add_layer(
        Layer::new(LayerRole::Background).with_object(text(0.0, 0.0, 100.0, 150.0, "watermark")),
    );
    first.add_layer(
        Layer::new(LayerRole::Body)
            .with_object(text(10.0, 20.0, 30.0, 5.0, "Title"))
            .with_object(PathObject::default())
            .with_object(text(10.0, 30.0, 80.0, 5.0, "Paragraph")),
    );

    let mut second = Page::new();
    second.add_layer(Layer::new(LayerRole::Foreground).with_object(text(5.0, 5.0, 20.0, 4.0, "Stamp")));

    let mut document = Document::new();
    document.add_page(first);
    document.add_page(second);
    ofd_with(document)
}

#[test]
fn test_page_count_and_order() {
    let conversion = convert(&sample_ofd()).unwrap();
    let passage = &conversion.passage;

    assert_eq!(passage.page_count(), 2);
    assert_eq!(passage.page(0).unwrap().width, mm_to_pixel(100.0));
    assert_eq!(passage.page(0).unwrap().height, mm_to_pixel(150.0));
    assert_eq!(passage.page(1).unwrap().width, mm_to_pixel(210.0));
    assert_eq!(passage.page(1).unwrap().height, mm_to_pixel(297.0));
    assert!(passage.pages.iter().all(|p| p.is_visible()));
}

#[test]
fn test_metadata_copied_verbatim() {
    let conversion = convert(&sample_ofd()).unwrap();
    assert_eq!(conversion.passage.version, "1.0");
    assert_eq!(conversion.passage.doc_type, "OFD");
    assert_eq!(conversion.passage.doc_info, DocInfo::with_title("Sample"));
}

#[test]
fn test_only_first_body_used() {
    let mut ofd = sample_ofd();
    let mut other = Document::new();
    other.add_page(Page::new());
    other.add_page(Page::new());
    other.add_page(Page::new());
    ofd.add_body(DocBody::new(DocInfo::with_title("Other"), other));

    let conversion = convert(&ofd).unwrap();
    assert_eq!(conversion.passage.page_count(), 2);
    assert_eq!(conversion.passage.doc_info.title.as_deref(), Some("Sample"));
}

#[test]
fn test_text_block_geometry() {
    let conversion = convert(&sample_ofd()).unwrap();
    let page = conversion.passage.page(0).unwrap();
    let title = &page.layer(LayerKind::Body).blocks[0];

    assert_eq!(title.layer, LayerKind::Body);
    assert_eq!(title.position(), (mm_to_pixel(10.0), mm_to_pixel(20.0)));
    assert_eq!(title.size(), (mm_to_pixel(30.0), mm_to_pixel(5.0)));

    let content = title.as_text().unwrap();
    assert_eq!(content.text, "Title");
    assert_eq!(content.style.font_size, mm_to_pixel(3.0));
    assert!(content.style.frame.margins.is_zero());
    assert_eq!(content.style.frame.padding, 0.0);
    assert!(content.style.paragraph.margins.is_zero());
    assert_eq!(content.style.paragraph.line_height, LineHeight::Minimum(0.0));
}

#[test]
fn test_every_text_style_normalized() {
    let conversion = convert(&sample_ofd()).unwrap();
    for page in &conversion.passage.pages {
        for block in page.blocks() {
            let style: &TextStyle = &block.as_text().unwrap().style;
            assert!(style.is_normalized());
        }
    }
}

#[test]
fn test_layers_keep_source_order() {
    let conversion = convert(&sample_ofd()).unwrap();
    let page = conversion.passage.page(0).unwrap();

    let body: Vec<_> = page
        .layer(LayerKind::Body)
        .blocks
        .iter()
        .map(|b| b.as_text().unwrap().text.clone())
        .collect();
    assert_eq!(body, vec!["Title".to_string(), "Paragraph".to_string()]);
    assert_eq!(page.layer(LayerKind::Background).blocks.len(), 1);
    assert!(page.layer(LayerKind::Foreground).blocks.is_empty());

    let second = conversion.passage.page(1).unwrap();
    assert_eq!(second.layer(LayerKind::Foreground).blocks.len(), 1);
}

#[test]
fn test_path_and_image_produce_nothing() {
    let mut page = Page::new();
    page.add_layer(
        Layer::new(LayerRole::Body)
            .with_object(PathObject::default())
            .with_object(ImageObject::default()),
    );
    let mut document = Document::new();
    document.add_page(page);

    let conversion = convert(&ofd_with(document)).unwrap();
    assert!(conversion.passage.page(0).unwrap().is_empty());
    assert!(conversion.is_clean());
    assert_eq!(conversion.stats.skipped_path_count, 1);
    assert_eq!(conversion.stats.skipped_image_count, 1);
}

#[test]
fn test_malformed_object_skipped_siblings_kept() {
    let mut page = Page::new();
    page.add_layer(
        Layer::new(LayerRole::Body)
            .with_object(text(0.0, 0.0, 10.0, 5.0, "before"))
            .with_object(text(0.0, 10.0, -10.0, -5.0, "broken").with_id(42))
            .with_object(text(0.0, 20.0, 10.0, 5.0, "after")),
    );
    page.add_layer(Layer::new(LayerRole::Foreground).with_object(text(1.0, 1.0, 1.0, 1.0, "top")));
    let mut document = Document::new();
    document.add_page(page);
    document.add_page(Page::new());

    let conversion = convert(&ofd_with(document)).unwrap();
    let page = conversion.passage.page(0).unwrap();

    let body: Vec<_> = page
        .layer(LayerKind::Body)
        .blocks
        .iter()
        .map(|b| b.as_text().unwrap().text.as_str())
        .collect();
    assert_eq!(body, ["before", "after"]);
    assert_eq!(page.layer(LayerKind::Foreground).blocks.len(), 1);
    assert_eq!(conversion.passage.page_count(), 2);

    assert_eq!(conversion.diagnostics.len(), 1);
    let diag = &conversion.diagnostics[0];
    assert_eq!(diag.page, 0);
    assert_eq!(diag.object_id, Some(42));
    assert!(matches!(diag.error, ObjectError::InvalidGeometry { .. }));
}

#[test]
fn test_text_missing_size_skipped_siblings_kept() {
    let json = r#"{
        "version": "1.0",
        "doc_type": "OFD",
        "doc_bodies": [{
            "doc_info": { "title": "Partial" },
            "document": {
                "pages": [{
                    "layers": [{
                        "type": "Body",
                        "objects": [
                            { "kind": "text", "id": 1,
                              "boundary": { "x": 10, "y": 10, "width": 50, "height": 5 },
                              "size": 3.5, "text_code": { "text": "kept" } },
                            { "kind": "text", "id": 2,
                              "boundary": { "x": 10, "y": 20, "width": 50, "height": 5 },
                              "text_code": { "text": "no size" } }
                        ]
                    }]
                }]
            }
        }]
    }"#;

    let conversion = convert_json_str(json).unwrap();
    let page = conversion.passage.page(0).unwrap();

    assert_eq!(page.block_count(), 1);
    assert_eq!(page.plain_text(), "kept");
    assert_eq!(conversion.diagnostics.len(), 1);

    let diag = &conversion.diagnostics[0];
    assert_eq!(diag.object_path, vec![1]);
    assert_eq!(diag.object_id, Some(2));
    assert_eq!(diag.error, ObjectError::MissingField("size"));
}

#[test]
fn test_unknown_layer_role_reported() {
    let mut page = Page::new();
    page.add_layer(
        Layer::new(LayerRole::from("Annotation")).with_object(text(0.0, 0.0, 1.0, 1.0, "lost")),
    );
    page.add_layer(Layer::new(LayerRole::Body).with_object(text(0.0, 0.0, 1.0, 1.0, "kept")));
    let mut document = Document::new();
    document.add_page(page);

    let conversion = convert(&ofd_with(document)).unwrap();
    assert_eq!(conversion.passage.block_count(), 1);
    assert_eq!(
        conversion.diagnostics[0].error,
        ObjectError::UnknownLayerRole("Annotation".into())
    );
    assert_eq!(conversion.stats.failed_layer_count, 1);
}

#[test]
fn test_background_layer_stays_background() {
    let mut page = Page::new();
    page.add_layer(Layer::new(LayerRole::Background).with_object(text(0.0, 0.0, 1.0, 1.0, "bg")));
    let mut document = Document::new();
    document.add_page(page);

    let conversion = convert(&ofd_with(document)).unwrap();
    let page = conversion.passage.page(0).unwrap();
    assert_eq!(page.layer(LayerKind::Background).blocks.len(), 1);
    assert!(page.layer(LayerKind::Body).blocks.is_empty());
}

#[test]
fn test_nested_page_blocks_flattened() {
    let mut page = Page::new();
    page.add_layer(
        Layer::new(LayerRole::Body)
            .with_object(text(0.0, 0.0, 1.0, 1.0, "one"))
            .with_object(
                PageBlock::new()
                    .with_object(text(0.0, 0.0, 1.0, 1.0, "two"))
                    .with_object(PageBlock::new().with_object(text(0.0, 0.0, 1.0, 1.0, "three"))),
            )
            .with_object(text(0.0, 0.0, 1.0, 1.0, "four")),
    );
    let mut document = Document::new();
    document.add_page(page);

    let conversion = convert(&ofd_with(document)).unwrap();
    assert_eq!(
        conversion.passage.plain_text(),
        "one\ntwo\nthree\nfour".to_string()
    );
}

#[test]
fn test_zero_bodies_is_structural_failure() {
    let err = convert(&Ofd::new("1.0", "OFD")).unwrap_err();
    assert!(matches!(err, Error::MissingDocBody));
    assert!(err.is_structural());
}

#[test]
fn test_body_without_document_is_structural_failure() {
    let mut ofd = Ofd::new("1.0", "OFD");
    ofd.add_body(DocBody::default());
    let err = convert(&ofd).unwrap_err();
    assert!(matches!(err, Error::MissingDocument));
}

#[test]
fn test_idempotent() {
    let ofd = sample_ofd();
    let first = convert(&ofd).unwrap();
    let second = convert(&ofd).unwrap();
    assert_eq!(first.passage, second.passage);
    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_strict_mode_fails_whole_conversion() {
    let mut page = Page::new();
    page.add_layer(Layer::new(LayerRole::Body).with_object(text(0.0, 0.0, -1.0, 1.0, "bad")));
    let mut document = Document::new();
    document.add_page(Page::new());
    document.add_page(page);

    let err = OfdConverter::new()
        .strict()
        .convert(&ofd_with(document))
        .unwrap_err();
    assert!(matches!(err, Error::ObjectConversion { page: 1, .. }));
}

#[test]
fn test_custom_default_page_size() {
    let mut document = Document::new();
    document.add_page(Page::new());

    let options = ConvertOptions::new().with_default_page_size(PageSize::new(148.0, 210.0));
    let conversion = convert_with_options(&ofd_with(document), &options).unwrap();
    let page = conversion.passage.page(0).unwrap();
    assert_eq!(page.width, mm_to_pixel(148.0));
    assert_eq!(page.height, mm_to_pixel(210.0));
}

#[test]
fn test_common_area_inheritance() {
    let mut document = Document::new();
    document.common_data = Some(CommonData {
        max_unit_id: 0,
        page_area: Some(PageArea::new(297.0, 210.0)),
    });
    document.add_page(Page::new());
    document.add_page(Page::with_area(100.0, 100.0));
    let ofd = ofd_with(document);

    let inherited = OfdConverter::new()
        .with_common_area_inheritance(true)
        .convert(&ofd)
        .unwrap();
    assert!(inherited.passage.page(0).unwrap().is_landscape());
    assert_eq!(inherited.passage.page(1).unwrap().width, mm_to_pixel(100.0));

    let plain = convert(&ofd).unwrap();
    assert_eq!(plain.passage.page(0).unwrap().width, mm_to_pixel(210.0));
}

#[test]
fn test_parallel_conversion_matches() {
    let mut document = Document::new();
    for i in 0..32 {
        let mut page = Page::with_area(100.0 + i as f64, 200.0);
        page.add_layer(
            Layer::new(LayerRole::Body)
                .with_object(text(i as f64, 0.0, 10.0, 5.0, &format!("page {}", i)))
                .with_object(text(0.0, 0.0, -1.0, 5.0, "bad")),
        );
        document.add_page(page);
    }
    let ofd = ofd_with(document);

    let sequential = convert(&ofd).unwrap();
    let parallel = OfdConverter::new().with_parallel(true).convert(&ofd).unwrap();
    assert_eq!(sequential.passage, parallel.passage);
    assert_eq!(sequential.diagnostics, parallel.diagnostics);
    assert_eq!(parallel.diagnostics.len(), 32);
    assert!(parallel
        .diagnostics
        .windows(2)
        .all(|w| w[0].page < w[1].page));
}

#[test]
fn test_unit_round_trip_on_block() {
    let conversion = convert(&sample_ofd()).unwrap();
    let title = &conversion.passage.page(0).unwrap().layer(LayerKind::Body).blocks[0];
    assert!((pixel_to_mm(title.x) - 10.0).abs() < 1e-9);
    assert!((pixel_to_mm(title.width) - 30.0).abs() < 1e-9);
}

use booklet_order::*;

#[test]
fn test_stats_no_pages() {
    let stats = calculate_statistics(0usize, &BookletOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 0);
    assert_eq!(stats.padded_pages, 0);
    assert_eq!(stats.output_sheets, 0);
    assert_eq!(stats.output_pages, 0);
    assert_eq!(stats.blank_pages_added, 0);
}

#[test]
fn test_stats_exact_fit() {
    let stats = calculate_statistics(12usize, &BookletOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 12);
    // Perfect fit, no padding needed
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.padded_pages, 12);
    // 12 pages / 4 pages per sheet = 3 sheets
    assert_eq!(stats.output_sheets, 3);
    // 3 sheets * 2 sides = 6 output pages
    assert_eq!(stats.output_pages, 6);
}

#[test]
fn test_stats_with_padding() {
    let stats = calculate_statistics(6usize, &BookletOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 6);
    // 6 pages padded to 8
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.output_sheets, 2);
    assert_eq!(stats.output_pages, 4);
}

#[test]
fn test_stats_with_flyleaves() {
    let options = BookletOptions {
        front_flyleaves: 2,
        back_flyleaves: 2,
    };

    let stats = calculate_statistics(10usize, &options).unwrap();

    // 10 original + (2 front flyleaves * 2 pages) + (2 back flyleaves * 2 pages) = 18 pages
    assert_eq!(stats.source_pages, 10);
    assert_eq!(stats.flyleaf_pages, 8);
    // 18 pages padded to 20
    assert_eq!(stats.padded_pages, 20);
    assert_eq!(stats.blank_pages_added, 2);
    assert_eq!(stats.output_sheets, 5);
    assert_eq!(stats.output_pages, 10);
}

#[test]
fn test_stats_agree_with_layout() {
    let options = BookletOptions {
        front_flyleaves: 1,
        back_flyleaves: 0,
    };
    for n in 0..=60usize {
        let stats = calculate_statistics(n, &options).unwrap();
        let layout = compute_with_options(n, &options).unwrap();

        assert_eq!(stats.output_sheets, layout.sheet_count(), "N={n}");
        assert_eq!(stats.padded_pages, layout.padded_pages(), "N={n}");
        assert_eq!(
            stats.blank_pages_added + stats.flyleaf_pages,
            layout.blank_count(),
            "N={n}"
        );
    }
}

#[test]
fn test_stats_negative_pages() {
    let result = calculate_statistics(-3i64, &BookletOptions::default());
    match result {
        Err(BookletError::InvalidArgument(_)) => {}
        _ => panic!("Expected InvalidArgument error"),
    }
}

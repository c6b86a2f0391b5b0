//! Lays out a small photo feed and prints what a phone-sized viewport would show.
//!
//! Run: cargo run -p masonry-grid-core --example photo_feed
use masonry_grid_core::prelude::*;

fn main() -> masonry_grid_core::Result<()> {
    let photos = vec![
        ItemSpec::with_aspect("beach", 1200.0, 800.0, 36.0),
        ItemSpec::with_aspect("tower", 600.0, 1400.0, 36.0),
        ItemSpec::with_aspect("cat", 1000.0, 1000.0, 52.0),
        ItemSpec::with_aspect("forest", 900.0, 1350.0, 36.0),
        ItemSpec::with_aspect("skyline", 1600.0, 600.0, 52.0),
        ItemSpec::with_aspect("portrait", 800.0, 1200.0, 36.0),
    ];
    let params = LayoutParameters::builder()
        .container(
            375.0,
            Insets {
                left: 23.0,
                right: 0.0,
            },
        )
        .build();
    let mut session = LayoutSession::new(params, photos.len(), ItemSpecs(&photos));

    let size = session.total_size()?;
    println!("content: {:.1} x {:.1}", size.width, size.height);
    for p in session.query(Rect::new(0.0, 0.0, 352.0, 400.0))? {
        let photo = p.primary_rect();
        println!(
            "{:<10} col {} photo @({:.1}, {:.1}) {:.1}x{:.1}",
            photos[p.index].key, p.column, photo.x, photo.y, photo.w, photo.h
        );
    }
    Ok(())
}

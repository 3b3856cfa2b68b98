use std::io::Cursor;

use super::*;

#[test]
fn join_never_doubles_slashes() {
    assert_eq!(join("/Scroll_Animation/", "car.jpg"), "/Scroll_Animation/car.jpg");
    assert_eq!(join("/Scroll_Animation", "/car.jpg"), "/Scroll_Animation/car.jpg");
    assert_eq!(join("", "car.jpg"), "/car.jpg");
    assert_eq!(join("/base/", ""), "/base");
    assert_eq!(join("", ""), "/");
}

#[test]
fn urls_use_config_prefixes() {
    let cfg = PageConfig::default();
    assert_eq!(asset_url(&cfg, "car.jpg"), "/Scroll_Animation/car.jpg");
    assert_eq!(page_url(&cfg, "/"), "/Scroll_Animation");
    assert_eq!(page_url(&cfg, "about"), "/Scroll_Animation/about");
}

#[test]
fn missing_image_degrades_to_broken() {
    let cfg = PageConfig::default();
    let hero = HeroImage::inspect(Path::new("target/no-such-dir"), &cfg);
    assert_eq!(hero.state, ImageState::Broken);
    assert_eq!(hero.url, "/Scroll_Animation/car.jpg");
    assert!((hero.aspect(&cfg) - 0.625).abs() < 1e-12);
}

#[test]
fn inspect_reads_intrinsic_size() {
    let dir = PathBuf::from("target").join("hero_inspect");
    std::fs::create_dir_all(&dir).unwrap();

    let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(dir.join("hero.png"), &buf).unwrap();

    let mut cfg = PageConfig::default();
    cfg.hero_image.file = "hero.png".to_owned();
    let hero = HeroImage::inspect(&dir, &cfg);
    assert_eq!(
        hero.state,
        ImageState::Loaded {
            width: 4,
            height: 2
        }
    );
    assert_eq!(hero.aspect(&cfg), 0.5);
}

use c8font::catalog::{self, FontSize};
use c8font::{BigFont, FontError, FontSelection, Machine, SmallFont, MEM_SIZE};
use claims::{assert_err, assert_ok};

fn snapshot(m: &Machine<'_>) -> (Vec<u8>, Vec<u8>, FontSelection) {
    (m.low_font_region().to_vec(), m.high_font_region().to_vec(), m.fonts())
}

#[test]
fn every_small_index_installs_its_block() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    m.set_fonts(None, Some(1));
    let high = m.high_font_region().to_vec();
    for i in 0..5 {
        m.set_fonts(Some(i), None);
        assert_eq!(Some(m.low_font_region()), catalog::glyphs(FontSize::Small, i));
        assert_eq!(m.fonts().small.index(), i);
        assert_eq!(m.high_font_region(), &high[..]);
        assert_eq!(m.fonts().big, BigFont::Schip);
    }
}

#[test]
fn every_big_index_installs_its_block() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    m.set_fonts(Some(3), None);
    let low = m.low_font_region().to_vec();
    for j in 0..3 {
        m.set_fonts(None, Some(j));
        assert_eq!(Some(m.high_font_region()), catalog::glyphs(FontSize::Big, j));
        assert_eq!(m.fonts().big.index(), j);
        assert_eq!(m.low_font_region(), &low[..]);
    }
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    m.set_fonts(Some(2), Some(2));
    let before = snapshot(&m);
    m.set_fonts(Some(7), None);
    m.set_fonts(Some(5), Some(3));
    m.set_fonts(None, Some(usize::MAX));
    assert_eq!(snapshot(&m), before);
}

#[test]
fn out_of_range_index_does_not_block_the_other() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    m.set_fonts(Some(9), Some(1));
    assert_eq!(m.fonts(), FontSelection { small: SmallFont::Octo, big: BigFont::Schip });
}

#[test]
fn small_font_by_name() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    m.set_fonts(Some(1), None);
    assert_ok!(m.set_small_font("octo"));
    assert_eq!(m.low_font_region(), SmallFont::Octo.glyphs());

    let before = m.mem().to_vec();
    let err = assert_err!(m.set_small_font("bogus"));
    assert_eq!(err, FontError::UnknownSmallFont("bogus".into()));
    assert_eq!(m.mem(), &before[..]);
}

#[test]
fn spec_with_both_fonts() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    assert_ok!(m.set_fonts_from_spec("vip,schip"));
    assert_eq!(m.low_font_region(), SmallFont::Vip.glyphs());
    assert_eq!(m.high_font_region(), BigFont::Schip.glyphs());
    let desc = m.describe_fonts();
    assert!(desc.contains("vip"));
    assert!(desc.contains("schip"));
    assert_eq!(desc, "SFONT: vip\tBFONT: schip");
}

#[test]
fn spec_with_small_font_only() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    m.set_fonts(None, Some(2));
    let high = m.high_font_region().to_vec();
    assert_ok!(m.set_fonts_from_spec("vip"));
    assert_eq!(m.fonts(), FontSelection { small: SmallFont::Vip, big: BigFont::Fish });
    assert_eq!(m.low_font_region(), SmallFont::Vip.glyphs());
    assert_eq!(m.high_font_region(), &high[..]);
}

#[test]
fn spec_with_invalid_big_font_keeps_small_font() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    let high = m.high_font_region().to_vec();
    let err = assert_err!(m.set_fonts_from_spec("vip,bogus"));
    assert_eq!(err, FontError::UnknownBigFont("bogus".into()));
    assert_eq!(err.token(), Some("bogus"));
    assert_eq!(m.fonts().small, SmallFont::Vip);
    assert_eq!(m.low_font_region(), SmallFont::Vip.glyphs());
    assert_eq!(m.fonts().big, BigFont::Octo);
    assert_eq!(m.high_font_region(), &high[..]);
}

#[test]
fn spec_with_invalid_small_font_changes_nothing() {
    let mut mem = vec![0u8; MEM_SIZE];
    let mut m = assert_ok!(Machine::new(&mut mem));
    let before = snapshot(&m);
    let err = assert_err!(m.set_fonts_from_spec("bogus,schip"));
    assert_eq!(err.token(), Some("bogus"));
    assert_eq!(snapshot(&m), before);
}

#[test]
fn writes_stay_inside_font_regions() {
    let mut mem = vec![0xa5u8; MEM_SIZE];
    let layout = c8font::Layout { font_start: 0x200, high_font_start: 0x300 };
    let mut m = assert_ok!(Machine::with_layout(&mut mem, layout));
    assert_ok!(m.set_fonts_from_spec("fish,fish"));
    m.set_fonts(Some(2), Some(1));
    drop(m);
    let mut untouched = mem[..0x200].iter()
        .chain(&mem[0x250..0x300])
        .chain(&mem[0x3a0..]);
    assert!(untouched.all(|&b| b == 0xa5));
    assert_eq!(&mem[0x200..0x250], SmallFont::Dream6800.glyphs());
    assert_eq!(&mem[0x300..0x3a0], BigFont::Schip.glyphs());
}

use btoi::btoi_radix;
use structopt::StructOpt;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};
use c8font::{FontError, FontSize, Layout, Machine, BIG_FONT_NAMES, SMALL_FONT_NAMES};

const HEX: &[u8] = b"0123456789ABCDEF";

/// Largest memory of any CHIP-8 variant (XO-CHIP).
const MAX_MEM_SIZE: usize = 0x10000;

#[derive(StructOpt)]
#[structopt(about = "Select CHIP-8 hex digit fonts and inspect the resulting memory.")]
pub struct Options {
    #[structopt(long, default_value="4096", parse(try_from_str=parse_mem_size),
                help="Size of machine memory (at most 64K)")]
    mem_size: usize,
    #[structopt(long, default_value="0x000", parse(try_from_str=parse_addr),
                help="Address of the small font")]
    font_start: usize,
    #[structopt(long, default_value="0x050", parse(try_from_str=parse_addr),
                help="Address of the big font")]
    high_font_start: usize,
    #[structopt(long, help="Small font by index (out of range values are ignored)")]
    small_index: Option<usize>,
    #[structopt(long, help="Big font by index (out of range values are ignored)")]
    big_index: Option<usize>,
    #[structopt(long, help="Small font by name")]
    small: Option<String>,
    #[structopt(long, help="Big font by name")]
    big: Option<String>,
    #[structopt(short="f", long, help="Fonts as \"small[,big]\" names")]
    fonts: Option<String>,
    #[structopt(short="l", long, help="List available font names")]
    list: bool,
    #[structopt(short="d", long, help="Dump the font regions in hex")]
    dump: bool,
}

/// Parse a decimal or `0x`-prefixed hex number.
fn parse_addr(s: &str) -> Result<usize, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => btoi_radix(hex.as_bytes(), 16),
        None => btoi_radix(s.as_bytes(), 10),
    };
    parsed.map_err(|_| format!("invalid address: {}", s))
}

fn parse_mem_size(s: &str) -> Result<usize, String> {
    let size = parse_addr(s)?;
    if size > MAX_MEM_SIZE {
        return Err(format!("memory size {} exceeds {:#x} bytes", s, MAX_MEM_SIZE));
    }
    Ok(size)
}

fn setup_tracing() {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    let sub = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer);
    let _ = tracing::subscriber::set_global_default(sub);
}

fn hex_line(out: &mut String, addr: usize, bytes: &[u8]) {
    out.push_str(&format!("{:03X}:", addr));
    for &byte in bytes {
        out.push(' ');
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0xf) as usize] as char);
    }
    out.push('\n');
}

/// One line per glyph of both font regions.
fn dump_fonts(machine: &Machine<'_>) -> String {
    let mut out = String::new();
    for &(size, region) in &[(FontSize::Small, machine.low_font_region()),
                             (FontSize::Big, machine.high_font_region())] {
        out.push_str(&format!("{} font:\n", size));
        for (digit, glyph) in region.chunks(size.glyph_len()).enumerate() {
            hex_line(&mut out, machine.glyph_address(size, digit as u8), glyph);
        }
    }
    out
}

fn list_fonts() -> String {
    format!("small fonts: {}\nbig fonts:   {}\n", SMALL_FONT_NAMES.join(", "), BIG_FONT_NAMES.join(", "))
}

fn run(args: &Options, mem: &mut [u8]) -> Result<String, FontError> {
    let layout = Layout { font_start: args.font_start, high_font_start: args.high_font_start };
    let mut machine = Machine::with_layout(mem, layout)?;

    machine.set_fonts(args.small_index, args.big_index);
    if let Some(name) = &args.small {
        machine.set_small_font(name)?;
    }
    if let Some(name) = &args.big {
        machine.set_big_font(name)?;
    }
    if let Some(spec) = &args.fonts {
        machine.set_fonts_from_spec(spec)?;
    }

    let mut out = String::new();
    if args.list {
        out.push_str(&list_fonts());
    }
    if args.dump {
        out.push_str(&dump_fonts(&machine));
    }
    out.push_str(&machine.describe_fonts());
    Ok(out)
}

fn main() {
    let args = Options::from_args();
    setup_tracing();

    let mut mem = vec![0_u8; args.mem_size];
    match run(&args, &mut mem) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c8font::MEM_SIZE;

    fn options(args: &[&str]) -> Options {
        Options::from_iter(std::iter::once("c8font_tool").chain(args.iter().copied()))
    }

    #[test]
    fn addresses() {
        assert_eq!(parse_addr("0x050"), Ok(0x50));
        assert_eq!(parse_addr("0X1A0"), Ok(0x1a0));
        assert_eq!(parse_addr("4096"), Ok(4096));
        assert!(parse_addr("0xg0").is_err());
        assert!(parse_addr("").is_err());
    }

    #[test]
    fn memory_size_is_capped() {
        assert_eq!(parse_mem_size("0x10000"), Ok(0x10000));
        assert!(parse_mem_size("0x10001").is_err());
        assert!(parse_mem_size("0xFFFFFFFFFFFFFFFF").is_err());
        assert!(Options::from_iter_safe(vec!["c8font_tool", "--mem-size", "0xFFFFFFFFFFFFFFFF"]).is_err());
    }

    #[test]
    fn huge_font_start_is_an_error() {
        let args = options(&["--font-start", "0xFFFFFFFFFFFFFFF5"]);
        let mut mem = vec![0_u8; args.mem_size];
        let err = run(&args, &mut mem).unwrap_err();
        assert_eq!(err, FontError::RegionOutOfBounds {
            size: FontSize::Small, start: 0xFFFF_FFFF_FFFF_FFF5, mem_len: MEM_SIZE,
        });
    }

    #[test]
    fn defaults() {
        let args = options(&[]);
        assert_eq!(args.mem_size, MEM_SIZE);
        assert_eq!(Layout { font_start: args.font_start, high_font_start: args.high_font_start },
                   Layout::default());
        let mut mem = vec![0_u8; args.mem_size];
        assert_eq!(run(&args, &mut mem).as_deref(), Ok("SFONT: octo\tBFONT: octo"));
    }

    #[test]
    fn spec_wins_over_names_and_indices() {
        let args = options(&["--small-index", "4", "--big", "fish", "-f", "vip,schip"]);
        let mut mem = vec![0_u8; args.mem_size];
        assert_eq!(run(&args, &mut mem).as_deref(), Ok("SFONT: vip\tBFONT: schip"));
    }

    #[test]
    fn invalid_name_is_an_error() {
        let args = options(&["-f", "vip,bogus"]);
        let mut mem = vec![0_u8; args.mem_size];
        assert_eq!(run(&args, &mut mem), Err(FontError::UnknownBigFont("bogus".into())));
    }

    #[test]
    fn bad_layout_is_an_error() {
        let args = options(&["--mem-size", "0x80"]);
        let mut mem = vec![0_u8; args.mem_size];
        assert!(run(&args, &mut mem).is_err());
    }

    #[test]
    fn dump_lists_every_glyph() {
        let args = options(&["-d", "--small-index", "1"]);
        let mut mem = vec![0_u8; args.mem_size];
        let out = run(&args, &mut mem).unwrap();
        assert_eq!(out.lines().count(), 2 + 32 + 1);
        assert!(out.contains("000: F0 90 90 90 F0\n"));
        assert!(out.contains("005: 60 20 20 20 70\n"));
        assert!(out.contains("050: FF FF C3 C3 C3 C3 C3 C3 FF FF\n"));
    }

    #[test]
    fn list_names() {
        assert_eq!(list_fonts(),
                   "small fonts: octo, vip, dream6800, eti660, fish\nbig fonts:   octo, schip, fish\n");
    }
}

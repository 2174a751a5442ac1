use anyhow::Error;
use format_digit_mask::{MaskFormat, Mode};
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Error> {
    setup_logging()?;

    let time = MaskFormat::new("**:**:**", '*');
    println!("mask {}", time.mask());
    let mut typed = String::new();
    for c in "123456".chars() {
        typed.push(c);
        println!("    {:8} -> {}", typed, time.format(&typed));
    }

    for mode in [Mode::Strict, Mode::FillIn, Mode::Mixed] {
        let phone = MaskFormat::new("+1(xxx)xx-77-xx", 'x').with_mode(mode);
        println!("mask {} {:?}", phone.mask(), mode);
        let mut typed = String::new();
        for c in "2345678".chars() {
            typed.push(c);
            println!("    {:8} -> {}", typed, phone.format(&typed));
        }
    }

    // one edit round, the way a host widget drives it.
    // "12:3" + typed '4' gives "12:34" with the cursor at 5.
    let text = "12:34";
    let new_text = time.format(text);
    let upd = time.relocate_cursor(text, 5..5, false, &new_text);
    println!(
        "{:?} reformatted {:?}, cursor {}, cut {:?}",
        text, new_text, upd.cursor, upd.text
    );

    let full = time.format("123456");
    if time.is_fulfilled(&full) {
        println!("{:?} is fulfilled, digits {:?}", full, time.unfixed_digits(&full)?);
    }

    Ok(())
}

fn setup_logging() -> Result<(), Error> {
    let log = PathBuf::from("masks.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}

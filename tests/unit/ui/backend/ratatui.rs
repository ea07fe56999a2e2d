use super::*;
use crate::ui::core::painter::Painter;

fn symbols(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .filter_map(|x| buf.cell((x, y)))
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn styles_convert_colors_and_modifiers() {
    let style = Style::default()
        .fg(Color::Rgb(1, 2, 3))
        .bg(Color::Indexed(8))
        .add_mod(Mod::BOLD | Mod::UNDERLINE);
    let converted = RStyle::from(style);
    assert_eq!(converted.fg, Some(RColor::Rgb(1, 2, 3)));
    assert_eq!(converted.bg, Some(RColor::Indexed(8)));
    assert!(converted.add_modifier.contains(RModifier::BOLD | RModifier::UNDERLINED));
    assert!(!converted.add_modifier.contains(RModifier::DIM));
}

#[test]
fn paint_commands_land_in_a_ratatui_buffer() {
    let mut painter = Painter::new();
    painter.fill_rect(Rect::new(0, 0, 6, 2), Style::default());
    painter.text(Pos::new(1, 0), "Lens", Style::default().fg(Color::Indexed(3)));
    painter.hline(Pos::new(0, 1), 6, '─', Style::default());

    let mut buf = Buffer::empty(RRect::new(0, 0, 6, 2));
    raster::replay(&mut buf, painter.cmds());

    assert_eq!(symbols(&buf, 0), " Lens ");
    assert_eq!(symbols(&buf, 1), "──────");
    assert_eq!(buf.cell((1, 0)).map(|c| c.fg), Some(RColor::Indexed(3)));
}

#[test]
fn restyle_patches_cells() {
    let mut buf = Buffer::empty(RRect::new(0, 0, 2, 1));
    buf.put(Pos::new(0, 0), "x", Style::default().fg(Color::Indexed(1)));
    buf.restyle(Pos::new(0, 0), Style::default().bg(Color::Indexed(4)));

    let cell = buf.cell((0, 0)).unwrap();
    assert_eq!(cell.symbol(), "x");
    assert_eq!(cell.fg, RColor::Indexed(1));
    assert_eq!(cell.bg, RColor::Indexed(4));
}

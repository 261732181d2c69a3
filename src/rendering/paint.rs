/// Paint commands produced from a barcode layout

use crate::encoder::ModuleKind;
use crate::rendering::layout::BarLayout;
use crate::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
}

/// One solid fill per column: bars in `bar`, spaces in `background`
pub fn paint_layout(layout: &BarLayout, bar: Rgba, background: Rgba) -> Vec<PaintCommand> {
    layout
        .columns
        .iter()
        .map(|c| PaintCommand::SolidRect {
            x: c.rect.x,
            y: c.rect.y,
            width: c.rect.width,
            height: c.rect.height,
            rgba: match c.kind {
                ModuleKind::Bar => bar,
                ModuleKind::Space => background,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::rendering::layout::layout_sequence;

    #[test]
    fn paints_bars_and_spaces_with_their_colors() {
        let layout = layout_sequence(&encode("4006381333931").unwrap(), 2.0, 5.0).unwrap();
        let cmds = paint_layout(&layout, Rgba::BLACK, Rgba::WHITE);
        assert_eq!(cmds.len(), layout.columns.len());
        match &cmds[0] {
            PaintCommand::SolidRect { x, width, height, rgba, .. } => {
                assert_eq!((*x, *width, *height), (0, 2, 5));
                assert_eq!(*rgba, Rgba::BLACK);
            }
        }
        match &cmds[1] {
            PaintCommand::SolidRect { x, rgba, .. } => {
                assert_eq!(*x, 2);
                assert_eq!(*rgba, Rgba::WHITE);
            }
        }
    }
}

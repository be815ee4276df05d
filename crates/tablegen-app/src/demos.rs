//! Built-in demo tables written by `tablegen-app demo`.
//!
//! Output:
//!   01_basic.png           -- Header, body and footer with default styling
//!   02_spans.png           -- Row and column spans
//!   03_styled.png          -- Per-level styles, alignment, fixed columns
//!   04_theme_{name}.png    -- The same records under each theme
//!   05_records.png         -- Records with field ordering and formatting

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tablegen::{
    Color, FontCache, GeneratorOptions, HAlign, Padding, RenderOptions, Table, TableBuilder,
    ThemeMode, VAlign, records_to_table,
};

#[derive(Serialize)]
struct Employee {
    name: &'static str,
    department: &'static str,
    start_year: u16,
    salary: u32,
    remote: bool,
}

fn employees() -> Vec<Employee> {
    vec![
        Employee {
            name: "Ada Lovelace",
            department: "Engineering",
            start_year: 2019,
            salary: 128_000,
            remote: true,
        },
        Employee {
            name: "Grace Hopper",
            department: "Compilers",
            start_year: 2015,
            salary: 142_500,
            remote: false,
        },
        Employee {
            name: "Alan Turing",
            department: "Research",
            start_year: 2021,
            salary: 119_000,
            remote: true,
        },
        Employee {
            name: "Katherine Johnson",
            department: "Flight Dynamics",
            start_year: 2012,
            salary: 150_250,
            remote: false,
        },
    ]
}

fn basic() -> Result<Table> {
    Ok(TableBuilder::new()
        .header(|h| {
            h.style(|s| {
                s.background(Color::LIGHT_GRAY).bold();
            })
            .row_texts(["Product", "Qty", "Price"]);
        })
        .body(|b| {
            b.row_texts(["Widget", "4", "$2.50"])
                .row_texts(["Gadget", "1", "$19.99"])
                .row_texts(["Doohickey with a much longer name", "12", "$0.75"]);
        })
        .footer(|f| {
            f.row(|r| {
                r.cell_with("Total", |c| {
                    c.col_span(2).bold();
                })
                .cell("$38.49");
            });
        })
        .build()?)
}

fn spans() -> Result<Table> {
    Ok(TableBuilder::new()
        .header(|h| {
            h.row(|r| {
                r.cell_with("Region", |c| {
                    c.row_span(2).align(HAlign::Center, VAlign::Middle);
                })
                .cell_with("Sales", |c| {
                    c.col_span(2).h_align(HAlign::Center);
                });
            })
            .row_texts(["Q1", "Q2"]);
        })
        .body(|b| {
            b.row(|r| {
                r.cell_with("North\n(incl. islands)", |c| {
                    c.row_span(2).v_align(VAlign::Middle);
                })
                .cells(["120", "135"]);
            })
            .row_texts(["98", "101"])
            .row_texts(["South", "77", "80"]);
        })
        .build()?)
}

fn styled() -> Result<Table> {
    Ok(TableBuilder::new()
        .default_font("DejaVu Sans", 13.0)
        .cell_padding(10.0, 6.0)
        .width(420.0)
        .columns(|c| {
            c.fixed(90.0).auto().auto();
        })
        .style(|s| {
            s.border_color_hex("#B0BEC5").background_hex("#FAFAFA");
        })
        .header(|h| {
            h.style(|s| {
                s.background_hex("#263238")
                    .text_color(Color::WHITE)
                    .bold()
                    .border_bottom(3.0);
            })
            .row_texts(["Status", "Task", "Owner"]);
        })
        .body(|b| {
            b.row(|r| {
                r.cell_with("done", |c| {
                    c.style(|s| {
                        s.text_color(Color::GREEN);
                    });
                })
                .cell("Wire the layout engine into the renderer")
                .cell_with("kim", |c| {
                    c.h_align(HAlign::Right).italic();
                });
            })
            .row(|r| {
                r.cell_with("blocked", |c| {
                    c.style(|s| {
                        s.text_color(Color::RED);
                    });
                })
                .cell("Measure glyph bounding boxes for line height")
                .cell_with("sam", |c| {
                    c.h_align(HAlign::Right).italic();
                });
            });
        })
        .alternate_rows_with(
            |_| {},
            |s| {
                s.background_hex("#ECEFF1");
            },
        )
        .build()?)
}

fn themed(mode: ThemeMode) -> Result<Table> {
    let options = GeneratorOptions::default()
        .with_theme(mode)
        .with_field_filter(|f| f != "salary");
    Ok(records_to_table(&employees(), &options)?)
}

fn records() -> Result<Table> {
    let options = GeneratorOptions::default()
        .with_field_order(["department", "name"])
        .with_value_formatter(|v| match v.as_bool() {
            Some(true) => "yes".to_string(),
            Some(false) => "no".to_string(),
            None => tablegen::records::value_text(v),
        })
        .with_max_width(520.0);
    Ok(records_to_table(&employees(), &options)?)
}

fn save(table: &Table, fonts: &FontCache, path: &Path) -> Result<()> {
    let options = RenderOptions::default()
        .with_background(Color::WHITE)
        .with_margin(Padding::uniform(12.0));
    let fb = table.render(fonts, &options)?;
    fb.save_png(path)?;
    log::info!("wrote {} ({}x{})", path.display(), fb.width(), fb.height());
    Ok(())
}

/// Render every demo into `out_dir`, creating it if needed.
pub fn write_all(out_dir: &Path, fonts: &FontCache) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    save(&basic()?, fonts, &out_dir.join("01_basic.png"))?;
    save(&spans()?, fonts, &out_dir.join("02_spans.png"))?;
    save(&styled()?, fonts, &out_dir.join("03_styled.png"))?;
    for (mode, name) in [
        (ThemeMode::Light, "light"),
        (ThemeMode::Dark, "dark"),
        (ThemeMode::Minimal, "minimal"),
        (ThemeMode::Compact, "compact"),
    ] {
        save(&themed(mode)?, fonts, &out_dir.join(format!("04_theme_{name}.png")))?;
    }
    save(&records()?, fonts, &out_dir.join("05_records.png"))?;
    Ok(())
}

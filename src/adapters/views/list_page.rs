use std::fmt::{self, Display, Write};

use crate::application::dto::listing_dto::{GameEntry, ListingDTO, SaveEntry};

const TITLE: &str = "Satisfactory Saves";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 60em; color: #222; }
h2 { margin-top: 2em; border-bottom: 1px solid #ccc; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.3em 0.6em; }
tr:nth-child(even) { background: #f4f4f4; }
.latest a { margin-right: 1em; }
";

/// Escapes text for HTML element content and quoted attribute values.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

pub fn render(listing: &ListingDTO) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", TITLE)?;
    writeln!(out, "<style>\n{}</style>", STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>{}</h1>", TITLE)?;

    if listing.games.is_empty() {
        writeln!(out, "<p class=\"empty\">No saves found.</p>")?;
    }

    for game in &listing.games {
        render_game(&mut out, game)?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    Ok(out)
}

fn render_game(out: &mut String, game: &GameEntry) -> fmt::Result {
    writeln!(out, "<section class=\"game\">")?;
    writeln!(out, "<h2>{}</h2>", Escaped(&game.name))?;
    writeln!(
        out,
        "<p class=\"latest\"><a href=\"{}\">Download latest</a><a href=\"{}\">View latest</a></p>",
        Escaped(&game.latest_download_url),
        Escaped(&game.latest_view_url)
    )?;
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<tr><th>Save</th><th>Type</th><th>Saved</th><th>Size</th><th></th><th></th></tr>"
    )?;
    for save in &game.saves {
        render_save(out, save)?;
    }
    writeln!(out, "</table>")?;
    writeln!(out, "</section>")
}

fn render_save(out: &mut String, save: &SaveEntry) -> fmt::Result {
    writeln!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href=\"{}\">Download</a></td><td><a href=\"{}\">View</a></td></tr>",
        Escaped(&save.file_name),
        Escaped(&save.save_type),
        Escaped(&save.save_time),
        Escaped(&save.file_size),
        Escaped(&save.download_url),
        Escaped(&save.view_url)
    )
}

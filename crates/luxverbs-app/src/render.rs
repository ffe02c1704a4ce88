use colored::{Color, Colorize};
use luxverbs_types::{TrustedFragment, Verb, ViewModel};

// Rough terminal stand-in for the per-category button shades.
const CATEGORY_COLORS: [Color; 4] = [Color::Blue, Color::Cyan, Color::Green, Color::Magenta];

/// Render one view as a full screenful: header, the active region, and the
/// navigation hint line.
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{}\n\n", "══ Lux By Heart ══".bold()));

    match view {
        ViewModel::Home { categories, verbs } => out.push_str(&render_home(categories, verbs)),
        ViewModel::Category { label, verbs } => out.push_str(&render_category(label, verbs)),
        ViewModel::Detail { verb } => out.push_str(&render_detail(verb)),
    }

    if view.shows_back() {
        out.push_str("\n[b] back   [q] quit\n");
    } else {
        out.push_str("\n[c N] open category   [N] open verb   [q] quit\n");
    }

    out
}

fn render_home(categories: &[String], verbs: &[Verb]) -> String {
    if categories.is_empty() {
        return "No verbs loaded.\n".to_string();
    }

    let mut out = String::new();
    for (i, label) in categories.iter().enumerate() {
        let color = CATEGORY_COLORS[i % CATEGORY_COLORS.len()];
        out.push_str(&format!("  c {}  {}\n", i + 1, label.color(color).bold()));
    }

    out.push_str(&format!("\n{}\n", "All verbs (A-Z)".bold()));
    out.push_str(&render_verb_list(verbs));
    out
}

fn render_category(label: &str, verbs: &[Verb]) -> String {
    let mut out = format!("{}\n", label.bold());
    out.push_str(&render_verb_list(verbs));
    out
}

fn render_verb_list(verbs: &[Verb]) -> String {
    let mut out = String::new();
    for (i, verb) in verbs.iter().enumerate() {
        out.push_str(&format!(
            "  {:>3}. {}  ({} / {} / {})\n",
            i + 1,
            verb.lu.bold(),
            verb.en,
            verb.fr,
            verb.de
        ));
    }
    out
}

fn render_detail(verb: &Verb) -> String {
    let mut out = format!("{}\n\n", verb.lu.bold().underline());
    out.push_str(&format!(
        "  EN  {}\n  FR  {}\n  DE  {}\n",
        verb.en, verb.fr, verb.de
    ));

    if !verb.all.is_empty() {
        out.push('\n');
        for line in verb.all.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    if let Some(media) = render_fragment(&verb.video) {
        out.push_str(&format!("\n  {media}\n"));
    }

    out
}

/// The one place externally-sourced markup is turned into output. The
/// fragment is an iframe/embed snippet from the table; show its source URL
/// when one can be found, the raw snippet otherwise. Swapping the strategy
/// (sanitizer, real embed) touches only this function.
fn render_fragment(fragment: &TrustedFragment) -> Option<String> {
    if fragment.is_empty() {
        return None;
    }

    match extract_src(fragment.as_raw()) {
        Some(src) => Some(format!("Video: {src}")),
        None => Some(fragment.as_raw().to_string()),
    }
}

fn extract_src(raw: &str) -> Option<&str> {
    let start = raw.find("src=\"")? + "src=\"".len();
    let rest = &raw[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use luxverbs_types::{TrustedFragment, Verb, ViewModel};

    use super::*;

    fn verb(video: &str) -> Verb {
        Verb {
            id: 1,
            lu: "sinn".to_string(),
            en: "to be".to_string(),
            fr: "être".to_string(),
            de: "sein".to_string(),
            all: "ech sinn\ndu bass".to_string(),
            video: TrustedFragment::new(video),
        }
    }

    #[test]
    fn empty_home_renders_zero_categories_and_zero_verbs() {
        colored::control::set_override(false);

        let out = render(&ViewModel::Home {
            categories: Vec::new(),
            verbs: Vec::new(),
        });

        assert!(out.contains("No verbs loaded."));
        assert!(!out.contains("c 1"));
    }

    #[test]
    fn home_lists_categories_and_verbs() {
        colored::control::set_override(false);

        let out = render(&ViewModel::Home {
            categories: vec!["Modal verbs".to_string()],
            verbs: vec![verb("")],
        });

        assert!(out.contains("c 1  Modal verbs"));
        assert!(out.contains("1. sinn"));
        assert!(out.contains("to be / être / sein"));
    }

    #[test]
    fn detail_without_video_has_no_media_block() {
        colored::control::set_override(false);

        let out = render(&ViewModel::Detail { verb: verb("") });

        assert!(out.contains("sinn"));
        assert!(out.contains("ech sinn"));
        assert!(!out.contains("Video:"));
    }

    #[test]
    fn detail_shows_the_embed_source_url() {
        colored::control::set_override(false);

        let out = render(&ViewModel::Detail {
            verb: verb(r#"<iframe src="https://player.example/v/1"></iframe>"#),
        });

        assert!(out.contains("Video: https://player.example/v/1"));
    }

    #[test]
    fn fragment_without_src_falls_back_to_the_raw_snippet() {
        let media = render_fragment(&TrustedFragment::new("<video controls></video>")).unwrap();
        assert_eq!(media, "<video controls></video>");
    }

    #[test]
    fn back_hint_only_off_home() {
        colored::control::set_override(false);

        let home = render(&ViewModel::Home {
            categories: Vec::new(),
            verbs: Vec::new(),
        });
        let detail = render(&ViewModel::Detail { verb: verb("") });

        assert!(!home.contains("[b] back"));
        assert!(detail.contains("[b] back"));
    }
}

use kanal::{AsyncReceiver, AsyncSender};
use luxverbs_types::{AppEvent, UiEvent, ViewModel};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::render;

const HELP: &str = "commands: c N (category), N or v N (verb), b (back), q (quit)\n";

/// The rendering surface: prints every view the event loop derives and turns
/// stdin lines into UI events. Numbered commands resolve against the last
/// rendered view, so a selection can never name an unlisted target.
pub async fn ui_loop(
    render_rx: AsyncReceiver<ViewModel>,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();
    let mut current: Option<ViewModel> = None;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            view = render_rx.recv() => {
                let view = view?;
                stdout.write_all(render::render(&view).as_bytes()).await?;
                stdout.flush().await?;
                current = Some(view);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    event_tx.send(AppEvent::Ui(UiEvent::Quit)).await?;
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line, current.as_ref()) {
                    Some(event) => {
                        let quitting = event == UiEvent::Quit;
                        event_tx.send(AppEvent::Ui(event)).await?;
                        if quitting {
                            break;
                        }
                    }
                    None => {
                        stdout.write_all(HELP.as_bytes()).await?;
                        stdout.flush().await?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Map one input line to a UI event, relative to the view the user is
/// looking at. Returns None for anything that should just print help.
fn parse_command(line: &str, view: Option<&ViewModel>) -> Option<UiEvent> {
    let mut words = line.split_whitespace();
    let head = words.next()?;

    match head {
        "q" | "quit" => Some(UiEvent::Quit),
        "b" | "back" => Some(UiEvent::Back),
        "c" => {
            let n: usize = words.next()?.parse().ok()?;
            let ViewModel::Home { categories, .. } = view? else {
                return None;
            };
            let label = categories.get(n.checked_sub(1)?)?;
            Some(UiEvent::SelectCategory(label.clone()))
        }
        "v" => verb_at(words.next()?, view),
        number => verb_at(number, view),
    }
}

fn verb_at(word: &str, view: Option<&ViewModel>) -> Option<UiEvent> {
    let n: usize = word.parse().ok()?;
    let verbs = match view? {
        ViewModel::Home { verbs, .. } => verbs,
        ViewModel::Category { verbs, .. } => verbs,
        ViewModel::Detail { .. } => return None,
    };
    let verb = verbs.get(n.checked_sub(1)?)?;
    Some(UiEvent::SelectVerb(verb.id))
}

#[cfg(test)]
mod tests {
    use luxverbs_types::{TrustedFragment, Verb};

    use super::*;

    fn verb(id: i64, lu: &str) -> Verb {
        Verb {
            id,
            lu: lu.to_string(),
            en: String::new(),
            fr: String::new(),
            de: String::new(),
            all: String::new(),
            video: TrustedFragment::default(),
        }
    }

    fn home() -> ViewModel {
        ViewModel::Home {
            categories: vec!["Auxiliary verbs".to_string(), "Modal verbs".to_string()],
            verbs: vec![verb(10, "hunn"), verb(11, "sinn")],
        }
    }

    #[test]
    fn quit_and_back_need_no_view() {
        assert_eq!(parse_command("q", None), Some(UiEvent::Quit));
        assert_eq!(parse_command("back", None), Some(UiEvent::Back));
    }

    #[test]
    fn category_numbers_resolve_to_labels() {
        let view = home();
        assert_eq!(
            parse_command("c 2", Some(&view)),
            Some(UiEvent::SelectCategory("Modal verbs".to_string()))
        );
        assert_eq!(parse_command("c 3", Some(&view)), None);
        assert_eq!(parse_command("c 0", Some(&view)), None);
    }

    #[test]
    fn verb_numbers_resolve_to_ids() {
        let view = home();
        assert_eq!(parse_command("1", Some(&view)), Some(UiEvent::SelectVerb(10)));
        assert_eq!(parse_command("v 2", Some(&view)), Some(UiEvent::SelectVerb(11)));
        assert_eq!(parse_command("3", Some(&view)), None);
    }

    #[test]
    fn verbs_resolve_within_a_category_view() {
        let view = ViewModel::Category {
            label: "Modal verbs".to_string(),
            verbs: vec![verb(20, "kënnen")],
        };
        assert_eq!(parse_command("1", Some(&view)), Some(UiEvent::SelectVerb(20)));
    }

    #[test]
    fn numbers_do_nothing_on_a_detail_view() {
        let view = ViewModel::Detail {
            verb: verb(30, "goen"),
        };
        assert_eq!(parse_command("1", Some(&view)), None);
    }

    #[test]
    fn garbage_asks_for_help() {
        assert_eq!(parse_command("open sesame", Some(&home())), None);
        assert_eq!(parse_command("c", Some(&home())), None);
    }
}

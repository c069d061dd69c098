//! Line commands typed at the terminal.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Start,
    Stop,
    /// Empty line or `ok`: dismiss the result card.
    Acknowledge,
    SetEndpoint(String),
    ResetCounters,
    ServerStats,
    Manual(String),
    Help,
    Quit,
    /// Anything else. With a keyboard-wedge scanner this is usually a scan.
    Text(String),
}

impl UiCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        match (word.to_ascii_lowercase().as_str(), rest.is_empty()) {
            ("", _) | ("ok", true) => Self::Acknowledge,
            ("s" | "start", true) => Self::Start,
            ("x" | "stop", true) => Self::Stop,
            ("r" | "reset", true) => Self::ResetCounters,
            ("stats", true) => Self::ServerStats,
            ("h" | "help" | "?", true) => Self::Help,
            ("q" | "quit" | "exit", true) => Self::Quit,
            // An empty URL is a valid value: it clears the endpoint.
            ("c" | "config", _) => Self::SetEndpoint(rest.to_string()),
            ("m" | "manual", false) => Self::Manual(rest.to_string()),
            _ => Self::Text(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Comandos:
  s, start          iniciar escaneo
  x, stop           detener escaneo
  Enter, ok         volver al escáner tras un resultado
  c, config <url>   guardar la URL de la API
  r, reset          reiniciar contadores
  stats             consultar estadísticas del servidor
  m, manual <code>  validar un código escrito a mano (durante el escaneo)
  h, help           esta ayuda
  q, quit           salir";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_forms() {
        assert_eq!(UiCommand::parse("s"), UiCommand::Start);
        assert_eq!(UiCommand::parse("START"), UiCommand::Start);
        assert_eq!(UiCommand::parse(" x "), UiCommand::Stop);
        assert_eq!(UiCommand::parse("reset"), UiCommand::ResetCounters);
        assert_eq!(UiCommand::parse("q"), UiCommand::Quit);
    }

    #[test]
    fn enter_acknowledges() {
        assert_eq!(UiCommand::parse(""), UiCommand::Acknowledge);
        assert_eq!(UiCommand::parse("   "), UiCommand::Acknowledge);
        assert_eq!(UiCommand::parse("ok"), UiCommand::Acknowledge);
    }

    #[test]
    fn endpoint_keeps_its_argument_verbatim_after_trim() {
        assert_eq!(
            UiCommand::parse("c   https://script.example/exec?id=1  "),
            UiCommand::SetEndpoint("https://script.example/exec?id=1".into())
        );
        assert_eq!(UiCommand::parse("config"), UiCommand::SetEndpoint(String::new()));
    }

    #[test]
    fn manual_entry_keeps_inner_spaces() {
        assert_eq!(
            UiCommand::parse("m INV 42 A"),
            UiCommand::Manual("INV 42 A".into())
        );
    }

    #[test]
    fn commands_with_unexpected_arguments_are_text() {
        assert_eq!(UiCommand::parse("start now"), UiCommand::Text("start now".into()));
        assert_eq!(UiCommand::parse("m"), UiCommand::Text("m".into()));
        assert_eq!(UiCommand::parse("INV-2024-0042"), UiCommand::Text("INV-2024-0042".into()));
    }
}

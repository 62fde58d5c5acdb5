//! Parsing of shell input lines.

use thiserror::Error;

use crate::domain::FormField;

/// One user action typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a form field; an empty value clears it.
    Set(FormField, String),
    /// Press "Cadastrar Usuário".
    Submit,
    /// Press "Conceder Permissão".
    Permission,
    /// Press "Ver Mapa com Usuários".
    Map,
    /// Open the charts placeholder.
    Graficos,
    /// Open the camera placeholder.
    Camera,
    /// Pop the current screen.
    Back,
    /// List commands.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input the shell could not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank line.
    #[error("empty command")]
    Empty,
    /// First word is not a known command.
    #[error("unknown command `{0}`")]
    Unknown(String),
    /// A command that takes no value was given one.
    #[error("command `{0}` takes no value")]
    UnexpectedValue(String),
}

impl Command {
    /// Parse one line. The first word selects the command; for field commands
    /// the rest of the line, trimmed, is the value.
    ///
    /// # Errors
    ///
    /// See [`CommandError`].
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        let keyword = word.to_lowercase();
        if let Some(field) = field_for(&keyword) {
            return Ok(Self::Set(field, rest.to_owned()));
        }

        let command = match keyword.as_str() {
            "cadastrar" => Self::Submit,
            "permissao" | "permissão" => Self::Permission,
            "mapa" => Self::Map,
            "graficos" | "gráficos" => Self::Graficos,
            "camera" | "câmera" => Self::Camera,
            "voltar" => Self::Back,
            "ajuda" | "?" => Self::Help,
            "sair" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_owned())),
        };
        if rest.is_empty() {
            Ok(command)
        } else {
            Err(CommandError::UnexpectedValue(word.to_owned()))
        }
    }
}

fn field_for(keyword: &str) -> Option<FormField> {
    Some(match keyword {
        "nome" => FormField::Name,
        "rua" => FormField::Street,
        "numero" | "número" => FormField::Number,
        "cidade" => FormField::City,
        "estado" => FormField::State,
        _ => return None,
    })
}

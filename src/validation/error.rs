/// Schema violations in a game document.
///
/// Fatal to the pass that produced the document and to nothing else.
/// The display strings are the messages handed back to whoever
/// authored the game, so they name the offending player, action
/// and response wherever one exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StructuralError {
    #[error("Invalid game data structure: must be a list.")]
    NotAList,
    #[error("Invalid game data structure: two players required.")]
    TooFewPlayers(usize),
    #[error("Only 2-player games supported.")]
    TooManyPlayers(usize),
    #[error(
        "Invalid game data structure: player #{0} has invalid structure, must be a record with a string 'name', a list of string 'actions' and a dict of 'utilities'."
    )]
    MalformedPlayer(usize),
    #[error("Invalid game data structure: player '{0}' must declare at least one action.")]
    NoActions(String),
    #[error("Invalid game data structure: player '{player}' declares action '{action}' more than once.")]
    DuplicateAction { player: String, action: String },
    #[error("Invalid game data structure: both players are named '{0}'.")]
    DuplicatePlayer(String),
    #[error(
        "Inconsistent utilities: player '{player}' defines utilities for actions {utilities:?} but declares actions {actions:?}."
    )]
    UndeclaredActions {
        player: String,
        utilities: Vec<String>,
        actions: Vec<String>,
    },
    #[error("Invalid format: action '{action}' for {player} must be a dict")]
    MalformedAction { player: String, action: String },
    #[error("Invalid response format: response '{response}' for {player} action '{action}' must be a dict")]
    MalformedResponse {
        player: String,
        action: String,
        response: String,
    },
    #[error(
        "Invalid utility value: utility for {player} action '{action}' given response '{response}' must be numeric."
    )]
    NonNumeric {
        player: String,
        action: String,
        response: String,
    },
    #[error("Not all responses equivalent across actions for player {0}")]
    UnequalResponses(String),
    #[error(
        "Inconsistent actions and responses. Player {player}'s responses do not match the actions of {other}.\nresponses: {responses:?}\nactions: {actions:?}"
    )]
    MismatchedResponses {
        player: String,
        other: String,
        responses: Vec<String>,
        actions: Vec<String>,
    },
    #[error("Missing utility for {player} action '{action}' given response '{response}'.")]
    MissingUtility {
        player: String,
        action: String,
        response: String,
    },
    #[error("Payoff matrices require exactly two players, found {0}.")]
    PlayerCount(usize),
}

//! Reducer for the navigation drawer overlay.

use crate::ui::mvi::Reducer;

use super::intent::DrawerIntent;
use super::state::DrawerState;

pub struct DrawerReducer;

impl Reducer for DrawerReducer {
    type State = DrawerState;
    type Intent = DrawerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DrawerIntent::Open { entries, cursor } => open(entries, cursor),
            DrawerIntent::Close => DrawerState::Closed,
            DrawerIntent::Toggle { entries, cursor } => match state {
                DrawerState::Open { .. } => DrawerState::Closed,
                DrawerState::Closed => open(entries, cursor),
            },
            DrawerIntent::MoveUp => match state {
                DrawerState::Open { cursor, entries } => DrawerState::Open {
                    cursor: if cursor == 0 {
                        entries.saturating_sub(1)
                    } else {
                        cursor - 1
                    },
                    entries,
                },
                other => other,
            },
            DrawerIntent::MoveDown => match state {
                DrawerState::Open { cursor, entries } => DrawerState::Open {
                    cursor: if cursor + 1 >= entries { 0 } else { cursor + 1 },
                    entries,
                },
                other => other,
            },
        }
    }
}

fn open(entries: usize, cursor: usize) -> DrawerState {
    DrawerState::Open {
        cursor: cursor.min(entries.saturating_sub(1)),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> DrawerState {
        DrawerReducer::reduce(
            DrawerState::Closed,
            DrawerIntent::Open {
                entries: 6,
                cursor: 0,
            },
        )
    }

    #[test]
    fn open_clamps_cursor() {
        let state = DrawerReducer::reduce(
            DrawerState::Closed,
            DrawerIntent::Open {
                entries: 6,
                cursor: 42,
            },
        );
        assert_eq!(state.cursor(), Some(5));
    }

    #[test]
    fn toggle_closes_open_drawer() {
        let state = DrawerReducer::reduce(
            opened(),
            DrawerIntent::Toggle {
                entries: 6,
                cursor: 0,
            },
        );
        assert!(!state.is_open());
    }

    #[test]
    fn move_up_wraps_to_last() {
        let state = DrawerReducer::reduce(opened(), DrawerIntent::MoveUp);
        assert_eq!(state.cursor(), Some(5));
    }

    #[test]
    fn move_down_wraps_to_first() {
        let mut state = opened();
        for _ in 0..6 {
            state = DrawerReducer::reduce(state, DrawerIntent::MoveDown);
        }
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn move_on_closed_is_noop() {
        let state = DrawerReducer::reduce(DrawerState::Closed, DrawerIntent::MoveDown);
        assert_eq!(state, DrawerState::Closed);
    }
}

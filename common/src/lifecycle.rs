//! Forward-only escrow lifecycle: INITIALIZED -> ACTIVATED -> FINALIZED.

use soroban_sdk::{contracttype, Env};

use crate::{
    errors::Error,
    storage::{get_data, store_data},
};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum EscrowState {
    Initialized = 0,
    Activated = 1,
    Finalized = 2,
}

#[contracttype]
#[derive(Clone)]
enum LifecycleKey {
    State,
}

impl EscrowState {
    pub fn next(&self) -> Option<EscrowState> {
        match self {
            EscrowState::Initialized => Some(EscrowState::Activated),
            EscrowState::Activated => Some(EscrowState::Finalized),
            EscrowState::Finalized => None,
        }
    }

    /// Moves exactly one step forward. Regressions, skips and self-transitions
    /// fail with `InvalidState`.
    pub fn advance(&self, to: EscrowState) -> Result<EscrowState, Error> {
        match self.next() {
            Some(next) if next == to => Ok(next),
            _ => Err(Error::InvalidState),
        }
    }

    pub fn require(&self, expected: EscrowState) -> Result<(), Error> {
        if *self != expected {
            return Err(Error::InvalidState);
        }
        Ok(())
    }
}

/// State of the escrow owned by the current contract instance.
pub fn load(env: &Env) -> EscrowState {
    get_data(env, &LifecycleKey::State).unwrap_or(EscrowState::Initialized)
}

pub fn store(env: &Env, state: EscrowState) {
    store_data(env, &LifecycleKey::State, &state);
}

pub fn require_state(env: &Env, expected: EscrowState) -> Result<(), Error> {
    load(env).require(expected)
}

/// Guards and persists a transition of the instance state.
pub fn transition(env: &Env, to: EscrowState) -> Result<EscrowState, Error> {
    let next = load(env).advance(to)?;
    store(env, next);
    Ok(next)
}

#[cfg(test)]
mod test {
    use super::EscrowState;
    use crate::errors::Error;

    #[test]
    fn advances_one_step_at_a_time() {
        let activated = EscrowState::Initialized
            .advance(EscrowState::Activated)
            .unwrap();
        assert_eq!(activated, EscrowState::Activated);
        assert_eq!(
            activated.advance(EscrowState::Finalized),
            Ok(EscrowState::Finalized)
        );
    }

    #[test]
    fn rejects_skips_and_regressions() {
        assert_eq!(
            EscrowState::Initialized.advance(EscrowState::Finalized),
            Err(Error::InvalidState)
        );
        assert_eq!(
            EscrowState::Activated.advance(EscrowState::Initialized),
            Err(Error::InvalidState)
        );
        assert_eq!(
            EscrowState::Activated.advance(EscrowState::Activated),
            Err(Error::InvalidState)
        );
        assert_eq!(
            EscrowState::Finalized.advance(EscrowState::Finalized),
            Err(Error::InvalidState)
        );
    }

    #[test]
    fn finalized_is_terminal() {
        assert_eq!(EscrowState::Finalized.next(), None);
        assert!(EscrowState::Initialized < EscrowState::Activated);
        assert!(EscrowState::Activated < EscrowState::Finalized);
    }

    #[test]
    fn require_matches_exact_state() {
        assert_eq!(EscrowState::Activated.require(EscrowState::Activated), Ok(()));
        assert_eq!(
            EscrowState::Initialized.require(EscrowState::Activated),
            Err(Error::InvalidState)
        );
    }
}

// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};

/// Extracts the identity carried by a verified token. Only the
/// `user(id, name)` fact is read; any role facts a token might carry are
/// ignored in favour of the stored role.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut identity = None;
    for fact in facts {
        if let Some(found) = user_fact(&fact.predicate) {
            identity = Some(found);
        }
    }

    let (raw_id, username) =
        identity.ok_or_else(|| ApplicationError::unauthorized("token carries no user identity"))?;
    let id = UserId::new(raw_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;
    Ok(AuthenticatedUser { id, username })
}

fn user_fact(predicate: &Predicate) -> Option<(i64, String)> {
    if predicate.name != "user" || predicate.terms.len() != 2 {
        return None;
    }
    match (&predicate.terms[0], &predicate.terms[1]) {
        (Term::Integer(id), Term::Str(name)) => Some((*id, name.clone())),
        _ => None,
    }
}

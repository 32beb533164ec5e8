use super::const_error;

const_error! {
    #[error("E000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}

const_error! {
    #[error("E001", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}

const_error! {
    #[error("E002", "missing fields")]
    #[status(BAD_REQUEST)]
    const JSON_MISSING_FIELDS;
}

const_error! {
    #[error("E003", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}

const_error! {
    #[error("E004", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}

const_error! {
    #[error("E005", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
}

const_error! {
    #[error("E006", "could not get claims")]
    #[status(UNAUTHORIZED)]
    const COULD_NOT_GET_CLAIMS;
}

const_error! {
    #[error("E007", "invalid token")]
    #[status(UNAUTHORIZED)]
    const JWT_INVALID_TOKEN;
}

const_error! {
    #[error("E008", "failed to issue token")]
    #[status(INTERNAL_SERVER_ERROR)]
    const JWT_ISSUE_FAILED;
}

const_error! {
    #[error("E009", "unknown user")]
    #[status(UNAUTHORIZED)]
    const UNKNOWN_USER;
}

const_error! {
    #[error("E010", "moderator permission required")]
    #[status(FORBIDDEN)]
    const NOT_MODERATOR;
}

const_error! {
    #[error("E011", "classroom not found")]
    #[status(NOT_FOUND)]
    const CLASSROOM_NOT_FOUND;
}

const_error! {
    #[error("E012", "you are not a member of this class")]
    #[status(UNAUTHORIZED)]
    const NOT_CLASS_MEMBER;
}

const_error! {
    #[error("E013", "invalid class code")]
    #[status(BAD_REQUEST)]
    const INVALID_CLASS_CODE;
}

const_error! {
    #[error("E014", "class code exists")]
    #[status(BAD_REQUEST)]
    const DUPLICATE_CLASS_CODE;
}

const_error! {
    #[error("E015", "failed to generate class code")]
    #[status(INTERNAL_SERVER_ERROR)]
    const FAILED_TO_GENERATE_CLASS_CODE;
}

const_error! {
    #[error("E016", "email is required")]
    #[status(BAD_REQUEST)]
    const EMAIL_REQUIRED;
}

const_error! {
    #[error("E017", "class code is required")]
    #[status(BAD_REQUEST)]
    const CLASS_CODE_REQUIRED;
}

const_error! {
    #[error("E018", "user not found")]
    #[status(NOT_FOUND)]
    const USER_NOT_FOUND;
}

const_error! {
    #[error("E019", "no classes found for this user")]
    #[status(NOT_FOUND)]
    const NO_INVITED_CLASSES;
}

const_error! {
    #[error("E020", "only teachers of the class can invite")]
    #[status(FORBIDDEN)]
    const NOT_CLASS_TEACHER;
}

const_error! {
    #[error("E021", "cannot read invitations of another user")]
    #[status(FORBIDDEN)]
    const FOREIGN_INVITATIONS;
}

const_error! {
    #[error("E022", "class member not found")]
    #[status(NOT_FOUND)]
    const CLASS_MEMBER_NOT_FOUND;
}

const_error! {
    #[error("E023", "team not found")]
    #[status(NOT_FOUND)]
    const TEAM_NOT_FOUND;
}

const_error! {
    #[error("E024", "member must be an accepted student of the class")]
    #[status(BAD_REQUEST)]
    const NOT_ACCEPTED_STUDENT;
}

const_error! {
    #[error("E025", "already in team")]
    #[status(BAD_REQUEST)]
    const ALREADY_IN_TEAM;
}

const_error! {
    #[error("E026", "user must be the leader of the team")]
    #[status(FORBIDDEN)]
    const NOT_TEAM_LEADER;
}

const_error! {
    #[error("E027", "no pending team invitation")]
    #[status(BAD_REQUEST)]
    const NO_PENDING_INVITATION;
}

const_error! {
    #[error("E028", "peer eval not found")]
    #[status(NOT_FOUND)]
    const PEER_EVAL_NOT_FOUND;
}

const_error! {
    #[error("E029", "peer eval already assigned")]
    #[status(BAD_REQUEST)]
    const PEER_EVAL_ALREADY_ASSIGNED;
}

#[cfg(test)]
pub(super) const ALL: &[super::Error<'static>] = &[
    INTERNAL,
    DATABASE_ERROR,
    JSON_MISSING_FIELDS,
    JSON_SYNTAX_ERROR,
    JSON_CONTENT_TYPE,
    JSON_VALIDATE_INVALID,
    COULD_NOT_GET_CLAIMS,
    JWT_INVALID_TOKEN,
    JWT_ISSUE_FAILED,
    UNKNOWN_USER,
    NOT_MODERATOR,
    CLASSROOM_NOT_FOUND,
    NOT_CLASS_MEMBER,
    INVALID_CLASS_CODE,
    DUPLICATE_CLASS_CODE,
    FAILED_TO_GENERATE_CLASS_CODE,
    EMAIL_REQUIRED,
    CLASS_CODE_REQUIRED,
    USER_NOT_FOUND,
    NO_INVITED_CLASSES,
    NOT_CLASS_TEACHER,
    FOREIGN_INVITATIONS,
    CLASS_MEMBER_NOT_FOUND,
    TEAM_NOT_FOUND,
    NOT_ACCEPTED_STUDENT,
    ALREADY_IN_TEAM,
    NOT_TEAM_LEADER,
    NO_PENDING_INVITATION,
    PEER_EVAL_NOT_FOUND,
    PEER_EVAL_ALREADY_ASSIGNED,
];

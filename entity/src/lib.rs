pub mod class_members;
pub mod classroom_invites;
pub mod classroom_peer_evals;
pub mod classrooms;
pub mod peer_evals;
pub mod team_members;
pub mod teams;
pub mod users;

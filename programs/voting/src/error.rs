use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Proposal title must not be empty")]
    EmptyTitle,
    #[msg("Proposal title is too long")]
    TitleTooLong,
    #[msg("Only the proposal creator can do this")]
    Unauthorized,
    #[msg("Proposal is closed")]
    ProposalClosed,
    #[msg("Voter has already voted on this proposal")]
    AlreadyVoted,
    #[msg("Counter overflow")]
    Overflow,
}

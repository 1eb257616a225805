use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Campaign title must not be empty")]
    EmptyTitle,
    #[msg("Campaign title is too long")]
    TitleTooLong,
    #[msg("Act description must not be empty")]
    EmptyDescription,
    #[msg("Act description is too long")]
    DescriptionTooLong,
    #[msg("Act does not belong to this campaign")]
    NotFound,
    #[msg("Only the campaign creator can do this")]
    Unauthorized,
    #[msg("Campaign is closed")]
    CampaignClosed,
    #[msg("Campaign is already closed")]
    AlreadyClosed,
    #[msg("Campaign is still open")]
    NotClosed,
    #[msg("Winner has already been selected")]
    AlreadySelected,
    #[msg("Campaign has no acts")]
    NoActs,
    #[msg("Voter has already voted in this campaign")]
    AlreadyVoted,
    #[msg("Counter overflow")]
    Overflow,
}

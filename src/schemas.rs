//! Wire schemas for region requests. Responses use [`Region`](crate::models::Region) directly.

use crate::models::region::DESCRIPTION_MAX_LENGTH;
use crate::service::ValidationRule;
use utoipa::ToSchema;

/// Body rules for create; a client-supplied `region_id` is not part of the schema and is dropped.
pub const REGION_CREATE_RULES: &[ValidationRule] = &[ValidationRule::string("region_description")
    .required()
    .length(1, DESCRIPTION_MAX_LENGTH as usize)];

/// Body rules for update, applied to the fields present only.
pub const REGION_UPDATE_RULES: &[ValidationRule] = REGION_CREATE_RULES;

#[derive(Debug, ToSchema)]
pub struct RegionIn {
    #[schema(min_length = 1, max_length = 60)]
    pub region_description: String,
}

#[derive(Debug, ToSchema)]
pub struct RegionPatch {
    #[schema(min_length = 1, max_length = 60)]
    pub region_description: Option<String>,
}

//! Region: id + short description, stored in table `region`.

use crate::entity::{ColumnInfo, Entity, EntityMeta};
use crate::service::CrudService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DESCRIPTION_MAX_LENGTH: u32 = 60;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Region {
    pub region_id: i16,
    pub region_description: String,
}

impl Entity for Region {
    const META: EntityMeta = EntityMeta {
        table_name: "region",
        pk_column: "region_id",
        columns: &[
            ColumnInfo::new("region_id", "smallint").not_null().with_default(),
            ColumnInfo::new("region_description", "varchar")
                .not_null()
                .max_length(DESCRIPTION_MAX_LENGTH),
        ],
    };
}

pub type RegionService = CrudService<Region>;

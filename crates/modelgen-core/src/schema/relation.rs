use serde::{Deserialize, Serialize};

/// An association between two tables implied by a foreign key.
///
/// Table fields hold qualified identifiers; model and prop fields hold the
/// already recased names used in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDef {
    pub parent_table: String,
    pub parent_model: String,
    pub parent_prop: String,
    pub parent_id: String,
    pub child_table: String,
    pub child_model: String,
    pub child_prop: String,
    pub child_id: String,
    #[serde(default)]
    pub is_one: bool,
    #[serde(default, rename = "isM2M")]
    pub is_m2m: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_m2m_flag() {
        let json = r#"{
            "parentTable": "users", "parentModel": "User", "parentProp": "user", "parentId": "userId",
            "childTable": "roles", "childModel": "Role", "childProp": "roles", "childId": "roleId",
            "isM2M": true
        }"#;
        let rel: RelationDef = serde_json::from_str(json).unwrap();
        assert!(rel.is_m2m);
        assert!(!rel.is_one);
    }
}

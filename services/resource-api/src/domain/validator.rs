/// insert/modify前のリソース構造バリデーション
///
/// 最初に失敗した条件だけを報告する。副作用なし。
use std::fmt;

use thiserror::Error;

use super::resource::Resource;

/// エラーメッセージの主語
///
/// modifyでは識別子を含めた主語（`Resource with identifier <id>`）になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(Option<String>);

impl Subject {
    fn anonymous() -> Self {
        Self(None)
    }

    fn identified(identifier: &str) -> Self {
        Self(Some(identifier.to_string()))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(identifier) => write!(f, "Resource with identifier {}", identifier),
            None => write!(f, "Resource"),
        }
    }
}

/// リソースのバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// insert時に識別子が指定されている
    #[error("Resource has identifier")]
    UnexpectedIdentifier,
    /// modify時に識別子がない
    #[error("Resource has no identifier")]
    MissingIdentifier,
    #[error("{0} has no metadata")]
    MissingMetadata(Subject),
    #[error("{0} has no files")]
    MissingFiles(Subject),
    #[error("{0} has no owner")]
    MissingOwner(Subject),
    /// metadataがマッピング型でない
    #[error("{0} has invalid attribute type for metadata")]
    InvalidMetadataType(Subject),
    /// filesがマッピング型でない
    #[error("{0} has invalid attribute type for files")]
    InvalidFilesType(Subject),
}

/// insert用バリデーション
///
/// チェック順序: 識別子なし → metadata → files → owner → metadata型 → files型
pub fn validate_for_insert(resource: &Resource) -> Result<(), ValidationError> {
    if resource.resource_identifier.is_some() {
        return Err(ValidationError::UnexpectedIdentifier);
    }
    validate_body(resource, Subject::anonymous())
}

/// modify用バリデーション
///
/// 識別子の存在チェックが最初に行われ、以降のメッセージには識別子が含まれる。
pub fn validate_for_modify(resource: &Resource) -> Result<(), ValidationError> {
    let identifier = resource
        .identifier()
        .ok_or(ValidationError::MissingIdentifier)?;
    validate_body(resource, Subject::identified(identifier))
}

fn validate_body(resource: &Resource, subject: Subject) -> Result<(), ValidationError> {
    let Some(metadata) = &resource.metadata else {
        return Err(ValidationError::MissingMetadata(subject));
    };
    let Some(files) = &resource.files else {
        return Err(ValidationError::MissingFiles(subject));
    };
    if resource.owner.is_none() {
        return Err(ValidationError::MissingOwner(subject));
    }
    if !metadata.is_mapping() {
        return Err(ValidationError::InvalidMetadataType(subject));
    }
    if !files.is_mapping() {
        return Err(ValidationError::InvalidFilesType(subject));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Files, Metadata, Shape};
    use serde_json::json;

    fn valid_resource() -> Resource {
        Resource {
            metadata: Some(Shape::Mapping(Metadata::default())),
            files: Some(Shape::Mapping(Files::new())),
            owner: Some("owner@unit.no".to_string()),
            ..Default::default()
        }
    }

    fn with_identifier(mut resource: Resource) -> Resource {
        resource.resource_identifier = Some("id-1".to_string());
        resource
    }

    // ==================== insert ====================

    #[test]
    fn test_insert_accepts_complete_resource() {
        assert_eq!(validate_for_insert(&valid_resource()), Ok(()));
    }

    #[test]
    fn test_insert_rejects_identifier() {
        let resource = with_identifier(valid_resource());
        assert_eq!(
            validate_for_insert(&resource),
            Err(ValidationError::UnexpectedIdentifier)
        );
    }

    #[test]
    fn test_insert_rejects_missing_fields() {
        let mut resource = valid_resource();
        resource.metadata = None;
        assert_eq!(
            validate_for_insert(&resource).unwrap_err().to_string(),
            "Resource has no metadata"
        );

        let mut resource = valid_resource();
        resource.files = None;
        assert_eq!(
            validate_for_insert(&resource).unwrap_err().to_string(),
            "Resource has no files"
        );

        let mut resource = valid_resource();
        resource.owner = None;
        assert_eq!(
            validate_for_insert(&resource).unwrap_err().to_string(),
            "Resource has no owner"
        );
    }

    #[test]
    fn test_insert_rejects_non_mapping_attributes() {
        let mut resource = valid_resource();
        resource.metadata = Some(Shape::Other(json!("text")));
        assert_eq!(
            validate_for_insert(&resource).unwrap_err().to_string(),
            "Resource has invalid attribute type for metadata"
        );

        let mut resource = valid_resource();
        resource.files = Some(Shape::Other(json!(["f1"])));
        assert_eq!(
            validate_for_insert(&resource).unwrap_err().to_string(),
            "Resource has invalid attribute type for files"
        );
    }

    /// 複数の条件に違反していても最初の1つだけを報告する
    #[test]
    fn test_insert_reports_first_failure_only() {
        let resource = Resource {
            resource_identifier: Some("id-1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_for_insert(&resource),
            Err(ValidationError::UnexpectedIdentifier)
        );

        let resource = Resource {
            metadata: Some(Shape::Other(json!(1))),
            ..Default::default()
        };
        // metadataの型不正よりfiles欠落が先に報告される
        assert_eq!(
            validate_for_insert(&resource).unwrap_err().to_string(),
            "Resource has no files"
        );
    }

    // ==================== modify ====================

    #[test]
    fn test_modify_accepts_complete_resource() {
        assert_eq!(validate_for_modify(&with_identifier(valid_resource())), Ok(()));
    }

    #[test]
    fn test_modify_requires_identifier_first() {
        let resource = Resource::default();
        assert_eq!(
            validate_for_modify(&resource),
            Err(ValidationError::MissingIdentifier)
        );
        assert_eq!(
            ValidationError::MissingIdentifier.to_string(),
            "Resource has no identifier"
        );
    }

    #[test]
    fn test_modify_messages_embed_identifier() {
        let mut resource = with_identifier(valid_resource());
        resource.metadata = None;
        assert_eq!(
            validate_for_modify(&resource).unwrap_err().to_string(),
            "Resource with identifier id-1 has no metadata"
        );

        let mut resource = with_identifier(valid_resource());
        resource.files = None;
        assert_eq!(
            validate_for_modify(&resource).unwrap_err().to_string(),
            "Resource with identifier id-1 has no files"
        );

        let mut resource = with_identifier(valid_resource());
        resource.owner = None;
        assert_eq!(
            validate_for_modify(&resource).unwrap_err().to_string(),
            "Resource with identifier id-1 has no owner"
        );

        let mut resource = with_identifier(valid_resource());
        resource.metadata = Some(Shape::Other(json!("text")));
        assert_eq!(
            validate_for_modify(&resource).unwrap_err().to_string(),
            "Resource with identifier id-1 has invalid attribute type for metadata"
        );

        let mut resource = with_identifier(valid_resource());
        resource.files = Some(Shape::Other(json!(null)));
        assert_eq!(
            validate_for_modify(&resource).unwrap_err().to_string(),
            "Resource with identifier id-1 has invalid attribute type for files"
        );
    }

    /// insertとmodifyは識別子の扱いだけが異なる
    #[test]
    fn test_insert_and_modify_agree_on_body_checks() {
        let candidates = [
            valid_resource(),
            Resource {
                owner: None,
                ..valid_resource()
            },
            Resource {
                files: Some(Shape::Other(json!(42))),
                ..valid_resource()
            },
            Resource::default(),
        ];

        for resource in candidates {
            let insert_ok = validate_for_insert(&resource).is_ok();
            let modify_ok = validate_for_modify(&with_identifier(resource)).is_ok();
            assert_eq!(insert_ok, modify_ok);
        }
    }
}

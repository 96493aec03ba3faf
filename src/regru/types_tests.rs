// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for record types and the response envelope.

#[cfg(test)]
mod tests {
    use crate::dns_errors::{RemoteError, ValidationError};
    use crate::regru::types::*;
    use serde_json::json;

    // =====================================================
    // RecordType
    // =====================================================

    #[test]
    fn test_create_action_per_record_type() {
        assert_eq!(RecordType::A.create_action(), "add_alias");
        assert_eq!(RecordType::AAAA.create_action(), "add_aaaa");
        assert_eq!(RecordType::CNAME.create_action(), "add_cname");
        assert_eq!(RecordType::MX.create_action(), "add_mx");
        assert_eq!(RecordType::TXT.create_action(), "add_txt");
    }

    #[test]
    fn test_record_type_parse_ignores_case() {
        assert_eq!("a".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!("Aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
        assert_eq!("cname".parse::<RecordType>().unwrap(), RecordType::CNAME);
        assert_eq!("mX".parse::<RecordType>().unwrap(), RecordType::MX);
        assert_eq!("TXT".parse::<RecordType>().unwrap(), RecordType::TXT);
    }

    #[test]
    fn test_record_type_parse_rejects_unknown() {
        let err = "SRV".parse::<RecordType>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedRecordType {
                record_type: "SRV".to_string()
            }
        );
        assert!("".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_record_type_display_round_trips() {
        for record_type in RecordType::ALL {
            assert_eq!(
                record_type.to_string().parse::<RecordType>().unwrap(),
                record_type
            );
        }
    }

    #[test]
    fn test_uses_domain_list() {
        assert!(!RecordType::A.uses_domain_list());
        assert!(!RecordType::AAAA.uses_domain_list());
        assert!(RecordType::CNAME.uses_domain_list());
        assert!(RecordType::MX.uses_domain_list());
        assert!(RecordType::TXT.uses_domain_list());
    }

    // =====================================================
    // Request serialization
    // =====================================================

    #[test]
    fn test_zone_ref_shapes() {
        assert_eq!(
            serde_json::to_value(ZoneRef::direct("example.com")).unwrap(),
            json!({"domain_name": "example.com"})
        );
        assert_eq!(
            serde_json::to_value(ZoneRef::listed("example.com")).unwrap(),
            json!({"domains": [{"dname": "example.com"}]})
        );
    }

    #[test]
    fn test_delete_request_serialization() {
        let request = DeleteRecordRequest {
            domains: vec![DomainName::new("example.com")],
            subdomain: "www".to_string(),
            content: "192.0.2.1".to_string(),
            record_type: "A".to_string(),
            output_content_type: "plain".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "domains": [{"dname": "example.com"}],
                "subdomain": "www",
                "content": "192.0.2.1",
                "record_type": "A",
                "output_content_type": "plain",
            })
        );
    }

    // =====================================================
    // ResponseEnvelope::has_error
    // =====================================================

    fn envelope(value: serde_json::Value) -> ResponseEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_envelope_has_no_error() {
        assert!(envelope(json!({"result": "success"})).has_error().is_ok());
    }

    #[test]
    fn test_error_envelope_carries_code_and_text() {
        let err = envelope(json!({
            "result": "error",
            "error_code": "X",
            "error_text": "Y",
        }))
        .has_error()
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains('X'));
        assert!(message.contains('Y'));
        assert_eq!(
            err,
            RemoteError::ResultFailed {
                result: "error".to_string(),
                error_code: "X".to_string(),
                error_text: "Y".to_string(),
            }
        );
    }

    #[test]
    fn test_failed_domain_inside_success_is_failure() {
        let err = envelope(json!({
            "result": "success",
            "answer": {
                "domains": [
                    {"dname": "example.com", "result": "error", "error_code": "NO_DOMAIN", "error_text": "Domain not found"}
                ]
            }
        }))
        .has_error()
        .unwrap_err();

        match err {
            RemoteError::DomainFailed {
                dname, error_code, ..
            } => {
                assert_eq!(dname, "example.com");
                assert_eq!(error_code, "NO_DOMAIN");
            }
            other => panic!("expected DomainFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_first_failed_domain_is_reported() {
        let err = envelope(json!({
            "result": "success",
            "answer": {
                "domains": [
                    {"dname": "ok.com", "result": "success"},
                    {"dname": "bad.com", "result": "error", "error_code": "A"},
                    {"dname": "worse.com", "result": "error", "error_code": "B"}
                ]
            }
        }))
        .has_error()
        .unwrap_err();

        assert!(err.to_string().contains("bad.com"));
    }

    #[test]
    fn test_all_domains_successful() {
        let env = envelope(json!({
            "result": "success",
            "answer": {
                "domains": [
                    {"dname": "example.com", "result": "success"},
                    {"dname": "example.org", "result": "success"}
                ]
            }
        }));
        assert!(env.has_error().is_ok());
    }

    #[test]
    fn test_missing_result_is_failure() {
        assert!(envelope(json!({})).has_error().is_err());
    }

    #[test]
    fn test_envelope_ignores_unknown_fields() {
        let env = envelope(json!({
            "result": "success",
            "charset": "utf-8",
            "messagestore": null,
            "answer": {"domains": [], "service_id": 12345}
        }));
        assert!(env.has_error().is_ok());
    }
}

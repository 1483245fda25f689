//! Tagging integration tests.

#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::json;
    use skyport_elasticsearch_model::input::{AddTagsInput, ListTagsInput, RemoveTagsInput};
    use skyport_elasticsearch_model::types::Tag;

    use crate::{MockHandler, Reply, body_json, client};

    const ARN: &str = "arn:aws:es:us-east-1:123456789012:domain/logs";

    #[tokio::test]
    async fn test_should_round_trip_tags() {
        let mock = MockHandler::new([
            Reply::status(200, "").header("x-amzn-requestid", "add-1"),
            Reply::ok(json!({"TagList": [{"Key": "team", "Value": "search"}, null]})),
            Reply::status(200, ""),
        ]);
        let client = client(&mock);

        let added = client
            .add_tags(AddTagsInput {
                arn: Some(ARN.to_owned()),
                tag_list: Some(vec![Tag::new("team", "search")]),
            })
            .await
            .unwrap();
        assert_eq!(added.metadata.request_id.as_deref(), Some("add-1"));

        let listed = client
            .list_tags(ListTagsInput {
                arn: Some(ARN.to_owned()),
            })
            .await
            .unwrap();
        assert_eq!(listed.tag_list, Some(vec![Tag::new("team", "search")]));

        client
            .remove_tags(RemoveTagsInput {
                arn: Some(ARN.to_owned()),
                tag_keys: Some(vec!["team".to_owned()]),
            })
            .await
            .unwrap();

        let sent = mock.requests();
        assert_eq!(sent.len(), 3);

        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].path, "/2015-01-01/tags");
        assert_eq!(
            body_json(&sent[0]),
            json!({"ARN": ARN, "TagList": [{"Key": "team", "Value": "search"}]})
        );

        assert_eq!(sent[1].method, Method::GET);
        assert_eq!(sent[1].query, vec![("arn".to_owned(), ARN.to_owned())]);
        assert_eq!(
            sent[1].query_string(),
            "arn=arn%3Aaws%3Aes%3Aus-east-1%3A123456789012%3Adomain%2Flogs"
        );
        assert!(sent[1].body.is_none());

        assert_eq!(sent[2].path, "/2015-01-01/tags-removal");
        assert_eq!(body_json(&sent[2]), json!({"ARN": ARN, "TagKeys": ["team"]}));

        let ids: Vec<_> = sent
            .iter()
            .filter_map(|r| r.header("amz-sdk-invocation-id"))
            .collect();
        assert_eq!(ids.len(), 3);
        assert_ne!(ids[0], ids[1]);
    }
}

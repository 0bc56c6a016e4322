/// Canonical REST path of an online model: `/projects/{project}/onlinemodels/{name}`.
///
/// Both segments are percent-encoded so names carrying `/` or spaces stay a single segment.
pub fn online_model_resource(project: &str, model_name: &str) -> String {
    format!(
        "/projects/{}/onlinemodels/{}",
        urlencoding::encode(project),
        urlencoding::encode(model_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(
            online_model_resource("prj", "iris_lr"),
            "/projects/prj/onlinemodels/iris_lr"
        );
    }

    #[test]
    fn test_names_are_encoded() {
        assert_eq!(
            online_model_resource("my prj", "a/b"),
            "/projects/my%20prj/onlinemodels/a%2Fb"
        );
    }
}

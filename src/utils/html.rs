/// Sanitizes teacher-authored text (challenge questions, problem statements)
/// before it is stored and rendered by the dashboards.
///
/// Whitelist-based: safe formatting tags such as `<b>` or `<code>` survive,
/// `<script>` (with its content) and event-handler attributes are removed.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

//! Published field names for every record in the specification model.
//!
//! Each table is fixed when the record type is defined: the internal (Rust)
//! field name next to the camelCase key written to the document. The tables
//! are checked against [`to_camel_case`](crate::document::to_camel_case) in
//! tests so a rename cannot drift silently.

/// A record field and the key it is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName {
    pub internal: &'static str,
    pub output: &'static str,
}

macro_rules! field_table {
    ($(#[$meta:meta])* $table:ident { $($field:ident => $internal:literal as $output:literal),* $(,)? }) => {
        $(#[$meta])*
        pub mod $table {
            use super::FieldName;

            $(
                pub const $field: FieldName = FieldName {
                    internal: $internal,
                    output: $output,
                };
            )*

            /// Every field, in publication order.
            pub const ALL: &[FieldName] = &[$($field),*];
        }
    };
}

field_table!(specification {
    ASYNCAPI => "asyncapi" as "asyncapi",
    ID => "id" as "id",
    DEFAULT_CONTENT_TYPE => "default_content_type" as "defaultContentType",
    INFO => "info" as "info",
    SERVERS => "servers" as "servers",
    CHANNELS => "channels" as "channels",
    COMPONENTS => "components" as "components",
});

field_table!(info {
    TITLE => "title" as "title",
    VERSION => "version" as "version",
    DESCRIPTION => "description" as "description",
    TERMS_OF_SERVICE => "terms_of_service" as "termsOfService",
    CONTACT => "contact" as "contact",
    LICENSE => "license" as "license",
});

field_table!(contact {
    NAME => "name" as "name",
    URL => "url" as "url",
    EMAIL => "email" as "email",
});

field_table!(license {
    NAME => "name" as "name",
    URL => "url" as "url",
});

field_table!(server {
    NAME => "name" as "name",
    URL => "url" as "url",
    PROTOCOL => "protocol" as "protocol",
    PROTOCOL_VERSION => "protocol_version" as "protocolVersion",
    DESCRIPTION => "description" as "description",
    VARIABLES => "variables" as "variables",
});

field_table!(
    /// `enum` is a Rust keyword, so the field is stored as `enum_values`.
    server_variable {
        DEFAULT => "default" as "default",
        DESCRIPTION => "description" as "description",
        ENUM_VALUES => "enum_values" as "enum",
    }
);

field_table!(channel {
    NAME => "name" as "name",
    DESCRIPTION => "description" as "description",
    SUBSCRIBE => "subscribe" as "subscribe",
    PUBLISH => "publish" as "publish",
});

field_table!(operation {
    OPERATION_ID => "operation_id" as "operationId",
    SUMMARY => "summary" as "summary",
    DESCRIPTION => "description" as "description",
    MESSAGE => "message" as "message",
});

field_table!(message {
    NAME => "name" as "name",
    TITLE => "title" as "title",
    SUMMARY => "summary" as "summary",
    DESCRIPTION => "description" as "description",
    CONTENT_TYPE => "content_type" as "contentType",
    PAYLOAD => "payload" as "payload",
});

field_table!(components {
    MESSAGES => "messages" as "messages",
    SCHEMAS => "schemas" as "schemas",
});

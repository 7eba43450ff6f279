use super::TemplateRenderer;
use crate::types::FileType;

const COMPONENT_TEMPLATE: &str = r#"import React from 'react';

const {name} = () => {
    return (
        <div>
            <h1>{name} Component</h1>
        </div>
    );
};

export default {name};
"#;

const SERVICE_TEMPLATE: &str = r#"export default class {name} {
    constructor() {
        // Initialize service
    }

    // Add service methods
}
"#;

/// Render the template for `file_type` with `name` as the identifier
pub fn render_boilerplate(file_type: FileType, name: &str) -> String {
    let template = match file_type {
        FileType::Component => COMPONENT_TEMPLATE,
        FileType::Service => SERVICE_TEMPLATE,
    };
    TemplateRenderer::new().render_string(template, name)
}

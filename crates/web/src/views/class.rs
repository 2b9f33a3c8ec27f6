//! Pages for the Class entity.

use wildpreserve_core::forms::{escape_html as esc, FieldError};
use wildpreserve_db::models::{Animal, Class};

use super::{error_list, layout};
use crate::forms::ClassForm;

pub fn list_page(classes: &[Class]) -> String {
    let mut body = String::from("<h1>Class List</h1>\n<ul>\n");
    for class in classes {
        body.push_str(&format!(
            "<li><a href=\"{url}\">{name}</a></li>\n",
            url = class.url(),
            name = esc(&class.name),
        ));
    }
    if classes.is_empty() {
        body.push_str("<li>There are no classes.</li>\n");
    }
    body.push_str("</ul>\n");
    layout("Class List", &body)
}

pub fn detail_page(class: &Class, animals: &[Animal]) -> String {
    let mut body = format!("<h1>Class: {}</h1>\n", esc(&class.name));
    body.push_str("<h2>Animals</h2>\n");
    if animals.is_empty() {
        body.push_str("<p>This class has no animals.</p>\n");
    } else {
        body.push_str("<dl>\n");
        for animal in animals {
            body.push_str(&format!(
                "<dt><a href=\"{url}\">{name}</a> ({binomial})</dt>\n<dd>{description}</dd>\n",
                url = animal.url(),
                name = esc(&animal.name),
                binomial = esc(&animal.binomial),
                description = esc(&animal.description),
            ));
        }
        body.push_str("</dl>\n");
    }
    body.push_str(&format!(
        "<p><a href=\"{url}/update\">Update</a> | <a href=\"{url}/delete\">Delete</a></p>\n",
        url = class.url(),
    ));
    layout("Class Detail", &body)
}

pub fn form_page(title: &str, form: &ClassForm, errors: &[FieldError]) -> String {
    let body = format!(
        "<h1>{title}</h1>\n\
         <form method=\"POST\">\n\
         <label for=\"name\">Name:</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\" placeholder=\"e.g. Mammalia\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n\
         {errors}",
        title = esc(title),
        name = esc(&form.name),
        errors = error_list(errors),
    );
    layout(title, &body)
}

/// Delete confirmation. Lists dependent animals when the delete is blocked.
pub fn delete_page(class: &Class, animals: &[Animal]) -> String {
    let mut body = format!("<h1>Delete Class: {}</h1>\n", esc(&class.name));
    if animals.is_empty() {
        body.push_str(
            "<p>Do you really want to delete this class?</p>\n\
             <form method=\"POST\">\n<button type=\"submit\">Delete</button>\n</form>\n",
        );
    } else {
        body.push_str(
            "<p>Delete the following animals before attempting to delete this class.</p>\n\
             <h2>Animals</h2>\n<ul>\n",
        );
        for animal in animals {
            body.push_str(&format!(
                "<li><a href=\"{url}\">{name}</a></li>\n",
                url = animal.url(),
                name = esc(&animal.name),
            ));
        }
        body.push_str("</ul>\n");
    }
    layout("Delete Class", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mammalia() -> Class {
        Class {
            id: 1,
            name: "Mammalia".to_string(),
        }
    }

    #[test]
    fn form_page_echoes_prior_input_and_errors() {
        let form = ClassForm {
            name: "Sugar Glider".to_string(),
        };
        let errors = vec![FieldError::new(
            "name",
            "Class has non-alphanumeric characters.",
        )];
        let page = form_page("Create Class", &form, &errors);
        assert!(page.contains("value=\"Sugar Glider\""));
        assert!(page.contains("<li>Class has non-alphanumeric characters.</li>"));
    }

    #[test]
    fn delete_page_blocks_when_dependents_exist() {
        let animal = Animal {
            id: 2,
            name: "Meerkat".to_string(),
            binomial: "Suricata suricatta".to_string(),
            description: "A small mongoose.".to_string(),
            img: "img1.png".to_string(),
            class_id: 1,
        };
        let blocked = delete_page(&mammalia(), std::slice::from_ref(&animal));
        assert!(blocked.contains("Delete the following animals"));
        assert!(!blocked.contains("<button type=\"submit\">Delete</button>"));

        let clear = delete_page(&mammalia(), &[]);
        assert!(clear.contains("<button type=\"submit\">Delete</button>"));
    }
}

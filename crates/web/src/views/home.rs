//! Home/dashboard page with the aggregate record counts.

use super::layout;
use crate::handlers::home::HomeCounts;

pub fn index_page(counts: &HomeCounts) -> String {
    let body = format!(
        "<h1>Wildlife Preserve Home</h1>\n\
         <p>Welcome to the wildlife preserve record manager.</p>\n\
         <h2>Dynamic content</h2>\n\
         <ul>\n\
         <li><strong>Animals:</strong> {animals}</li>\n\
         <li><strong>Preserve statuses:</strong> {statuses}</li>\n\
         <li><strong>Currently in preserve:</strong> {in_preserve}</li>\n\
         <li><strong>Classes:</strong> {classes}</li>\n\
         <li><strong>Orders:</strong> {orders}</li>\n\
         </ul>\n",
        animals = counts.animal_count,
        statuses = counts.preserve_status_count,
        in_preserve = counts.preserve_status_current_count,
        classes = counts.class_count,
        orders = counts.order_count,
    );
    layout("Wildlife Preserve Home", &body)
}

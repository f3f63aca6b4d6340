//! # Showcase Page
//!
//! Renders the binding showcase from an `App`. Each numbered section shows
//! one binding style:
//!
//! ```text
//! (intro)  interpolation + class binding per position
//! id1      class from a catalog-wide expression
//! id2      property binding (input value)
//! (table)  attribute binding (colspan)
//! id3/id4  class attribute merge, single-class binding
//! id5      class maps
//! id6/id7  single style property, style maps
//! id8/id9  conditional blocks, switch
//! id10-12  iteration with index and odd/even
//! id13/14  hover events on cells and rows
//! id15/16  input events
//! id17/18  two-way and split two-way binding
//! ```
//!
//! The whole tree is rebuilt on every call; there is no diffing.

use std::fmt;

use crate::core::action::Action;
use crate::core::binding::{self, ClassList, StyleMap};
use crate::core::product::{CatalogError, Product};
use crate::core::state::App;
use crate::markup::element::{DomEvent, Element, EventKind, Handler, NodePath};

/// A rendered page. The root is an implicit `body`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Render the showcase for the current state. Fails when the catalog
    /// is too short for a position the page binds to.
    pub fn render(app: &App) -> Result<Self, CatalogError> {
        let root = Element::new("body").with_children([
            intro(app)?,
            status_section(app),
            property_section(app),
            attribute_table(app),
            class_attribute_section(app),
            single_class_section(app)?,
            class_map_section(app)?,
            style_property_section(app)?,
            style_map_section(app)?,
            conditional_section(app)?,
            switch_section(app),
            plain_table(app),
            indexed_table(app),
            striped_table(app),
            cell_hover_section(app),
            row_hover_section(app),
            input_section(app, "id15"),
            input_section(app, "id16"),
            two_way_section(app),
            split_two_way_section(app),
        ]);
        Ok(Self { root })
    }

    /// First element with the given tag, in document order.
    pub fn first(&self, tag: &str) -> Option<&Element> {
        self.find(|el| el.tag() == tag)
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.find(|el| el.id() == Some(id))
    }

    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.path_where(predicate).and_then(|path| self.at(&path))
    }

    pub fn path_where(&self, predicate: impl Fn(&Element) -> bool) -> Option<NodePath> {
        self.root.find_path(&NodePath::root(), &predicate)
    }

    pub fn path_of_id(&self, id: &str) -> Option<NodePath> {
        self.path_where(|el| el.id() == Some(id))
    }

    pub fn at(&self, path: &NodePath) -> Option<&Element> {
        self.root.at(path)
    }

    /// Deliver `event` to the element at `path`. Returns the action of the
    /// first listener that handles it; the caller applies it with
    /// `update()` and renders again.
    pub fn dispatch(&self, path: &NodePath, event: &DomEvent) -> Option<Action> {
        self.at(path)?
            .listeners()
            .iter()
            .find_map(|listener| listener.handle(event))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

// ============================================================================
// Sections
// ============================================================================

fn section(id: &str) -> Element {
    Element::new("div").with_id(id)
}

fn selected_banner(app: &App) -> Element {
    let shown = if app.selected_product.is_empty() {
        "(None)"
    } else {
        app.selected_product.as_str()
    };
    Element::new("div").with_text(format!(" Selected Product: {shown} "))
}

fn intro(app: &App) -> Result<Element, CatalogError> {
    let first = app.product_by_position(0)?;
    let second = app.product_by_position(1)?;
    Ok(Element::new("div").with_children([
        Element::new("div")
            .with_classes(&app.classes_by_position(0)?)
            .with_text(format!(" The first product is {}. ", first.name)),
        Element::new("div")
            .with_classes(&app.classes_by_position(1)?)
            .with_text(format!(" The second product is {} ", second.name)),
    ]))
}

fn status_section(app: &App) -> Element {
    section("id1")
        .with_classes(&ClassList::parse(app.classes()))
        .with_text("Hello, World.")
}

fn property_section(app: &App) -> Element {
    section("id2").with_child(Element::new("input").with_value(&app.target_name))
}

fn attribute_table(app: &App) -> Element {
    let count = app.product_count();
    Element::new("table").with_child(
        Element::new("tr").with_child(
            Element::new("td")
                .with_attr("colspan", count)
                .with_text(format!("{count} products in the model")),
        ),
    )
}

fn class_attribute_section(app: &App) -> Element {
    let status = ClassList::parse(app.classes());
    section("id3").with_children([
        Element::new("div")
            .with_classes(&ClassList::parse("existing class"))
            .with_classes(&status)
            .with_text("Merged with static classes"),
        Element::new("div")
            .with_classes(&status)
            .with_text("Replaces all classes"),
    ])
}

fn single_class_section(app: &App) -> Result<Element, CatalogError> {
    let first = app.product(0)?;
    Ok(section("id4")
        .with_classes(&ClassList::parse(binding::tokens::PADDED))
        .with_class_if(
            binding::tokens::BG_SUCCESS,
            first.price > binding::PRICE_THRESHOLD,
        )
        .with_text(format!("The first product is {}", first.name)))
}

fn class_map_section(app: &App) -> Result<Element, CatalogError> {
    let padded = ClassList::parse(binding::tokens::PADDED);
    let mapped = |key: usize| -> Result<Element, CatalogError> {
        let product = app.product(key)?;
        Ok(Element::new("div")
            .with_classes(&padded)
            .with_classes(&app.class_map(key)?.to_class_list())
            .with_text(format!("The product is {}", product.name)))
    };
    Ok(section("id5").with_children([
        mapped(0)?,
        mapped(1)?,
        Element::new("div")
            .with_classes(&padded)
            .with_classes(&ClassList::parse(app.classes()))
            .with_text("This div has the catalog status"),
    ]))
}

fn style_property_section(app: &App) -> Result<Element, CatalogError> {
    let first = app.product(0)?;
    let mut with_units = StyleMap::new();
    with_units.insert("fontSize", app.font_size_with_units.as_str());
    let mut without_units = StyleMap::new();
    without_units.insert("font-size.px", app.font_size_without_units.as_str());

    let styled = |style: StyleMap| {
        Element::new("div").with_child(
            Element::new("span")
                .with_style(style)
                .with_text(first.name.clone()),
        )
    };
    Ok(section("id6").with_children([styled(with_units), styled(without_units)]))
}

fn style_map_section(app: &App) -> Result<Element, CatalogError> {
    let styled = |key: usize| -> Result<Element, CatalogError> {
        let product = app.product(key)?;
        Ok(Element::new("div").with_child(
            Element::new("span")
                .with_style(app.styles(key)?)
                .with_text(product.name.clone()),
        ))
    };
    Ok(section("id7").with_children([styled(0)?, styled(1)?]))
}

fn conditional_section(app: &App) -> Result<Element, CatalogError> {
    let mut el = section("id8").with_child(
        Element::new("div").with_text(format!("Product count: {}", app.product_count())),
    );
    if app.product_count() > 4 {
        el = el.with_child(
            Element::new("div").with_text(" There are more than 4 products in the model "),
        );
    }
    if app.product_by_position(0)?.name != binding::HIGHLIGHT_NAME {
        el = el.with_child(Element::new("div").with_text(" The first product isn't a Kayak "));
    }
    Ok(el)
}

fn switch_section(app: &App) -> Element {
    let case = match app.product_count() {
        2 => "There are two products",
        5 => "There are five products",
        _ => "This is the default",
    };
    section("id9").with_children([
        Element::new("span").with_text("Number of products:"),
        Element::new("div").with_child(Element::new("span").with_text(case)),
    ])
}

fn header_row(labels: &[&str]) -> Element {
    Element::new("tr").with_children(
        labels
            .iter()
            .map(|label| Element::new("th").with_text(*label)),
    )
}

/// Cells for a product row: 1-based position, name, category, price.
fn product_cells(index: usize, product: &Product) -> [Element; 4] {
    [
        Element::new("td").with_text((index + 1).to_string()),
        Element::new("td").with_text(product.name.clone()),
        Element::new("td").with_text(product.category.clone()),
        Element::new("td").with_text(product.price.to_string()),
    ]
}

const HEADERS: &[&str] = &["", "Name", "Category", "Price"];

fn plain_table(app: &App) -> Element {
    let rows = app.products().iter().map(|product| {
        Element::new("tr").with_children([
            Element::new("td").with_text(product.name.clone()),
            Element::new("td").with_text(product.category.clone()),
            Element::new("td").with_text(product.price.to_string()),
        ])
    });
    section("id10").with_child(
        Element::new("table")
            .with_child(header_row(&HEADERS[1..]))
            .with_children(rows),
    )
}

fn indexed_table(app: &App) -> Element {
    let rows = app
        .products()
        .iter()
        .enumerate()
        .map(|(i, product)| Element::new("tr").with_children(product_cells(i, product)));
    section("id11").with_child(
        Element::new("table")
            .with_child(header_row(HEADERS))
            .with_children(rows),
    )
}

fn striped_table(app: &App) -> Element {
    let rows = app.products().iter().enumerate().map(|(i, product)| {
        Element::new("tr")
            .with_classes(&binding::row_stripe(i))
            .with_children(product_cells(i, product))
    });
    section("id12").with_child(
        Element::new("table")
            .with_child(header_row(HEADERS))
            .with_children(rows),
    )
}

fn cell_hover_section(app: &App) -> Element {
    let rows = app.products().iter().enumerate().map(|(i, product)| {
        let cells = product_cells(i, product)
            .map(|cell| cell.on(EventKind::MouseOver, Handler::SelectProduct(i)));
        Element::new("tr").with_children(cells)
    });
    section("id13").with_children([
        selected_banner(app),
        Element::new("table")
            .with_child(header_row(HEADERS))
            .with_children(rows),
    ])
}

fn row_hover_section(app: &App) -> Element {
    let rows = app.products().iter().enumerate().map(|(i, product)| {
        Element::new("tr")
            .with_class_if(binding::tokens::BG_INFO, app.is_selected(product))
            .on(EventKind::MouseOver, Handler::SelectProduct(i))
            .with_children(product_cells(i, product))
    });
    section("id14").with_child(
        Element::new("table")
            .with_child(header_row(HEADERS))
            .with_children(rows),
    )
}

/// Event binding only: the input writes the selection but its value is
/// not bound back.
fn input_section(app: &App, id: &str) -> Element {
    section(id).with_children([
        selected_banner(app),
        Element::new("div")
            .with_child(Element::new("input").on(EventKind::Input, Handler::WriteSelection)),
    ])
}

/// Two inputs bound both ways to the selection.
fn two_way_section(app: &App) -> Element {
    let bound = || {
        Element::new("div").with_child(
            Element::new("input")
                .with_value(&app.selected_product)
                .on(EventKind::Input, Handler::WriteSelection),
        )
    };
    section("id17").with_children([selected_banner(app), bound(), bound()])
}

/// Value bound one way, change event written back separately.
fn split_two_way_section(app: &App) -> Element {
    section("id18").with_children([
        selected_banner(app),
        Element::new("div").with_child(Element::new("input").with_value(&app.selected_product)),
        Element::new("div").with_child(
            Element::new("input")
                .with_value(&app.selected_product)
                .on(EventKind::Input, Handler::WriteSelection),
        ),
    ])
}

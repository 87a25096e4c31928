//! Tests for the scope stack: implicit parenting, nesting, multi-entry,
//! explicit stacks, and pop-on-unwind.

use weaver_dom::{
    Attribute, Element, Render, ScopeStack, Tag, attach, nest, scope, scope_depth, take_roots,
};

// ========== thread-local free functions ==========

#[test]
fn test_scope_collects_children_and_attributes() {
    let p = scope(Element::new(Tag::P), || {
        attach("Text");
        attach(Attribute::new("class", "paragraph_class"));
        nest(Element::new(Tag::Span), || {
            attach("span");
            attach(Attribute::new("id", "span_id"));
        });
    });

    assert_eq!(
        "<p class=\"paragraph_class\">\n  Text\n  <span id=\"span_id\">\n    span\n  </span>\n</p>",
        p.to_string()
    );
    assert_eq!(0, scope_depth());
}

#[test]
fn test_nested_scopes_attach_to_innermost() {
    let ul = scope(Element::new(Tag::Ul), || {
        nest(Element::new(Tag::Li), || attach("one"));
        nest(Element::new(Tag::Li), || attach("two"));
        attach(Attribute::new("class", "plain"));
    });

    assert_eq!(
        "<ul class=\"plain\"><li>one</li><li>two</li></ul>",
        ul.display(false)
    );
}

#[test]
fn test_explicit_add_mixes_with_scoped_construction() {
    let p = scope(Element::new(Tag::P), || {
        let mut span = Element::new(Tag::Span);
        let _ = span.add(("span", Attribute::new("id", "span_id"))).unwrap();

        attach(Attribute::new("class", "paragraph_class"));
        attach(("Text", span));
    });

    assert_eq!(
        "<p class=\"paragraph_class\"><span id=\"span_id\">span</span></p>",
        {
            // Drop the loose text child to keep the assertion focused.
            let mut p = p;
            let _ = p.remove_child(0).unwrap();
            p.display(false)
        }
    );
}

// ========== explicit stacks and guards ==========

#[test]
fn test_explicit_stack_with_guards() {
    let stack = ScopeStack::new();
    let guard = stack.enter(Element::new(Tag::Div));
    stack.attach(("inner",)).unwrap();
    assert_eq!(1, stack.depth());

    let div = guard.finish();
    assert_eq!(0, stack.depth());
    assert_eq!("<div>inner</div>", div.display(false));
}

#[test]
fn test_enter_many_pushes_left_to_right() {
    let stack = ScopeStack::new();
    let guard = stack.enter_many([
        Element::new(Tag::Div),
        Element::new(Tag::Ul),
        Element::new(Tag::Li),
    ]);
    assert_eq!(3, stack.depth());

    // Attaches to the topmost (rightmost) element.
    stack.attach(("item",)).unwrap();

    // Closing nests li into ul into div and returns the outermost.
    let div = guard.finish();
    assert_eq!("<div><ul><li>item</li></ul></div>", div.display(false));
}

#[test]
fn test_attach_without_scope_is_an_error() {
    let stack = ScopeStack::new();
    assert!(stack.attach(("orphan",)).is_err());
}

#[test]
fn test_independent_stacks_do_not_interact() {
    let a = ScopeStack::new();
    let b = ScopeStack::new();

    let guard_a = a.enter(Element::new(Tag::Div));
    assert_eq!(0, b.depth());
    assert!(b.attach(("x",)).is_err());

    let _ = guard_a.finish();
}

// ========== pop on unwind ==========

#[test]
fn test_scope_pops_on_panic() {
    let result = std::panic::catch_unwind(|| {
        let _ = scope(Element::new(Tag::Div), || {
            attach("partial");
            panic!("boom");
        });
    });
    assert!(result.is_err());

    // The scope closed despite the unwind, and the partially built element
    // is recoverable.
    assert_eq!(0, scope_depth());
    let roots = take_roots();
    assert_eq!(1, roots.len());
    assert_eq!("<div>partial</div>", roots[0].display(false));
}

#[test]
fn test_dropped_guard_attaches_to_enclosing_scope() {
    let stack = ScopeStack::new();
    let outer = stack.enter(Element::new(Tag::Div));
    {
        let inner = stack.enter(Element::new(Tag::P));
        stack.attach(("body",)).unwrap();
        drop(inner);
    }
    let div = outer.finish();
    assert_eq!("<div><p>body</p></div>", div.display(false));
}

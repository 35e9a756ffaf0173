//! Go declaration frontend for sprig
//!
//! Parses the declaration subset of Go with `syn`: `var`/`const`
//! declarations (single or parenthesized groups) and the `func`, `type`
//! and `import` declarations that carry no values. Initializer
//! expressions are parsed as `syn::Expr`, which shares Go's operator
//! precedence for everything the evaluator understands.
//!
//! Newlines are not significant to the tokenizer, so declarations may be
//! separated by `;` or simply written one after another.

mod normalize;

use proc_macro2::{TokenStream, TokenTree};
use syn::ext::IdentExt;
use syn::parse::{ParseStream, Parser};
use syn::{parenthesized, Token};
use tracing::debug;

use crate::ast::{
    DeclKeyword, Declaration, SkippedDecl, SkippedKind, TypeExpr, ValueDecl, ValueSpec,
};
use crate::frontend::{LanguageFrontend, ParseError};
use crate::value::Value;

mod kw {
    syn::custom_keyword!(var);
    syn::custom_keyword!(func);
    syn::custom_keyword!(import);
    syn::custom_keyword!(map);
    syn::custom_keyword!(chan);
    syn::custom_keyword!(interface);
}

/// How character values are rendered in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharStyle {
    /// The scalar itself: `a`
    #[default]
    Scalar,

    /// The decimal code point: `97`
    CodePoint,
}

/// Go declaration frontend.
///
/// # Example
///
/// ```
/// use sprig::frontends::GoFrontend;
/// use sprig::LanguageFrontend;
///
/// let frontend = GoFrontend::new();
/// let decls = frontend.parse("var a, b = 1, 2; func f() {}").unwrap();
/// assert_eq!(decls.len(), 2);
/// assert_eq!(frontend.name(), "Go");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoFrontend {
    char_style: CharStyle,
}

impl GoFrontend {
    /// Create a Go frontend with default rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Go frontend with the given character rendering.
    pub fn with_char_style(char_style: CharStyle) -> Self {
        Self { char_style }
    }

    /// The character rendering in use.
    pub fn char_style(&self) -> CharStyle {
        self.char_style
    }
}

impl LanguageFrontend for GoFrontend {
    fn parse(&self, source: &str) -> Result<Vec<Declaration>, ParseError> {
        let normalized = normalize::normalize(source);
        parse_source.parse_str(&normalized).map_err(|e| {
            debug!(error = %e, "parse failed");
            ParseError::from_syn(&e, "input.go", source)
        })
    }

    fn format_value(&self, value: &Value) -> String {
        match (value, self.char_style) {
            (Value::Char(c), CharStyle::CodePoint) => u32::from(*c).to_string(),
            _ => value.to_string(),
        }
    }

    fn name(&self) -> &str {
        "Go"
    }

    fn file_extension(&self) -> &str {
        "go"
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Declarations
// ═══════════════════════════════════════════════════════════════════════

fn parse_source(input: ParseStream) -> syn::Result<Vec<Declaration>> {
    let mut decls = Vec::new();
    skip_semicolons(input)?;
    while !input.is_empty() {
        decls.push(parse_declaration(input)?);
        skip_semicolons(input)?;
    }
    Ok(decls)
}

fn skip_semicolons(input: ParseStream) -> syn::Result<()> {
    while input.peek(Token![;]) {
        input.parse::<Token![;]>()?;
    }
    Ok(())
}

fn parse_declaration(input: ParseStream) -> syn::Result<Declaration> {
    let lookahead = input.lookahead1();
    if lookahead.peek(kw::var) {
        input.parse::<kw::var>()?;
        value_decl(DeclKeyword::Var, input)
    } else if lookahead.peek(Token![const]) {
        input.parse::<Token![const]>()?;
        value_decl(DeclKeyword::Const, input)
    } else if lookahead.peek(kw::func) {
        input.parse::<kw::func>()?;
        skipped(SkippedKind::Func, parse_func(input)?)
    } else if lookahead.peek(Token![type]) {
        input.parse::<Token![type]>()?;
        skipped(SkippedKind::Type, parse_type_decl(input)?)
    } else if lookahead.peek(kw::import) {
        input.parse::<kw::import>()?;
        skipped(SkippedKind::Import, parse_import(input)?)
    } else {
        Err(lookahead.error())
    }
}

fn value_decl(keyword: DeclKeyword, input: ParseStream) -> syn::Result<Declaration> {
    Ok(Declaration::Value(ValueDecl {
        keyword,
        specs: parse_specs(input)?,
    }))
}

fn skipped(kind: SkippedKind, tokens: TokenStream) -> syn::Result<Declaration> {
    Ok(Declaration::Skipped(SkippedDecl { kind, tokens }))
}

/// `spec` or `( spec; spec; ... )`
fn parse_specs(input: ParseStream) -> syn::Result<Vec<ValueSpec>> {
    if !input.peek(syn::token::Paren) {
        return Ok(vec![parse_value_spec(input)?]);
    }

    let content;
    parenthesized!(content in input);
    let mut specs = Vec::new();
    skip_semicolons(&content)?;
    while !content.is_empty() {
        specs.push(parse_value_spec(&content)?);
        skip_semicolons(&content)?;
    }
    Ok(specs)
}

/// `name {, name} [Type] [= expr {, expr}]`
fn parse_value_spec(input: ParseStream) -> syn::Result<ValueSpec> {
    // `parse_any` so that `var true = 1` parses; the binding is then
    // refused by the environment.
    let mut names = vec![syn::Ident::parse_any(input)?];
    while input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        names.push(syn::Ident::parse_any(input)?);
    }

    // Right after the names, `func` can only open a function type.
    let ty = if starts_type(input) || input.peek(kw::func) {
        let mut tokens = TokenStream::new();
        parse_type(input, &mut tokens)?;
        Some(type_expr(tokens))
    } else {
        None
    };

    let values = if input.peek(Token![=]) {
        input.parse::<Token![=]>()?;
        parse_expr_list(input)?
    } else {
        Vec::new()
    };

    if ty.is_none() && values.is_empty() {
        return Err(input.error("expected a type or `=` after the declared names"));
    }

    Ok(ValueSpec { names, ty, values })
}

fn parse_expr_list(input: ParseStream) -> syn::Result<Vec<syn::Expr>> {
    let mut values = vec![input.parse::<syn::Expr>()?];
    while input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        values.push(input.parse::<syn::Expr>()?);
    }
    Ok(values)
}

/// `[(receiver)] name[TypeParams](params) [results] { body }`
fn parse_func(input: ParseStream) -> syn::Result<TokenStream> {
    let mut tokens = TokenStream::new();
    if input.peek(syn::token::Paren) {
        take(input, &mut tokens)?;
    }
    if !input.peek(syn::Ident::peek_any) {
        return Err(input.error("expected a function name"));
    }
    take(input, &mut tokens)?;
    if input.peek(syn::token::Bracket) {
        take(input, &mut tokens)?;
    }
    parse_signature(input, &mut tokens)?;
    if !input.peek(syn::token::Brace) {
        return Err(input.error("expected a function body"));
    }
    take(input, &mut tokens)?;
    Ok(tokens)
}

/// `T U`, `T = U`, `T[P any] U` or `( ... )`
fn parse_type_decl(input: ParseStream) -> syn::Result<TokenStream> {
    let mut tokens = TokenStream::new();
    if input.peek(syn::token::Paren) {
        take(input, &mut tokens)?;
        return Ok(tokens);
    }
    if !input.peek(syn::Ident::peek_any) {
        return Err(input.error("expected a type name"));
    }
    take(input, &mut tokens)?;
    if input.peek(Token![=]) {
        take(input, &mut tokens)?;
    }
    // Type parameters read as an array length here; both are one bracket group.
    parse_type(input, &mut tokens)?;
    Ok(tokens)
}

/// `"path"`, `name "path"` or `( ... )`
fn parse_import(input: ParseStream) -> syn::Result<TokenStream> {
    let mut tokens = TokenStream::new();
    if input.peek(syn::token::Paren) {
        take(input, &mut tokens)?;
        return Ok(tokens);
    }
    if !input.peek(syn::LitStr) {
        take(input, &mut tokens)?;
    }
    if !input.peek(syn::LitStr) {
        return Err(input.error("expected an import path"));
    }
    take(input, &mut tokens)?;
    Ok(tokens)
}

// ═══════════════════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════════════════

fn starts_type(input: ParseStream) -> bool {
    input.peek(syn::token::Paren)
        || input.peek(syn::token::Bracket)
        || input.peek(Token![*])
        || input.peek(Token![<-])
        || (input.peek(syn::Ident::peek_any) && !starts_declaration(input))
}

fn starts_declaration(input: ParseStream) -> bool {
    input.peek(kw::var)
        || input.peek(Token![const])
        || input.peek(kw::func)
        || input.peek(Token![type])
        || input.peek(kw::import)
}

/// Copy one Go type from `input` onto `tokens`.
fn parse_type(input: ParseStream, tokens: &mut TokenStream) -> syn::Result<()> {
    if input.peek(syn::token::Paren) {
        return take(input, tokens);
    }
    if input.peek(syn::token::Bracket) || input.peek(Token![*]) {
        take(input, tokens)?;
        return parse_type(input, tokens);
    }
    if input.peek(Token![<-]) {
        take_arrow(input, tokens)?;
        return parse_type(input, tokens);
    }
    if input.peek(kw::map) {
        take(input, tokens)?;
        if !input.peek(syn::token::Bracket) {
            return Err(input.error("expected `[` after `map`"));
        }
        take(input, tokens)?;
        return parse_type(input, tokens);
    }
    if input.peek(kw::chan) {
        take(input, tokens)?;
        if input.peek(Token![<-]) {
            take_arrow(input, tokens)?;
        }
        return parse_type(input, tokens);
    }
    if input.peek(kw::func) {
        take(input, tokens)?;
        return parse_signature(input, tokens);
    }
    if input.peek(Token![struct]) || input.peek(kw::interface) {
        take(input, tokens)?;
        if !input.peek(syn::token::Brace) {
            return Err(input.error("expected `{`"));
        }
        return take(input, tokens);
    }

    if !input.peek(syn::Ident::peek_any) || starts_declaration(input) {
        return Err(input.error("expected a type"));
    }
    take(input, tokens)?;
    if input.peek(Token![.]) {
        take(input, tokens)?;
        if !input.peek(syn::Ident::peek_any) {
            return Err(input.error("expected a type name after `.`"));
        }
        take(input, tokens)?;
    }
    if input.peek(syn::token::Bracket) {
        take(input, tokens)?;
    }
    Ok(())
}

/// `(params) [results]`
fn parse_signature(input: ParseStream, tokens: &mut TokenStream) -> syn::Result<()> {
    if !input.peek(syn::token::Paren) {
        return Err(input.error("expected a parameter list"));
    }
    take(input, tokens)?;
    if input.peek(syn::token::Paren) {
        take(input, tokens)?;
    } else if starts_type(input) {
        parse_type(input, tokens)?;
    }
    Ok(())
}

/// A bare name is a [`TypeExpr::Name`]; anything longer is composite.
fn type_expr(tokens: TokenStream) -> TypeExpr {
    let mut trees = tokens.clone().into_iter();
    match (trees.next(), trees.next()) {
        (Some(TokenTree::Ident(name)), None) => TypeExpr::Name(name),
        _ => TypeExpr::Composite(tokens),
    }
}

fn take(input: ParseStream, tokens: &mut TokenStream) -> syn::Result<()> {
    tokens.extend(std::iter::once(input.parse::<TokenTree>()?));
    Ok(())
}

/// `<-` is two punctuation tokens.
fn take_arrow(input: ParseStream, tokens: &mut TokenStream) -> syn::Result<()> {
    take(input, tokens)?;
    take(input, tokens)
}

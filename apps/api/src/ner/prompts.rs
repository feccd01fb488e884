/// System prompt for entity recognition through the LLM backend.
pub const NER_SYSTEM: &str = "You are a named-entity recognizer for resumes. \
    You label spans of the input text exactly as they appear; you never correct, \
    translate, or invent text.";

/// User prompt template. `{text}` is replaced with the resume plain text.
pub const NER_PROMPT_TEMPLATE: &str = r#"Identify the named entities in the resume text below.

Return JSON of the form:
{"entities": [{"text": "<exact span>", "label": "<LABEL>"}]}

Use spaCy-style labels: PERSON, ORG, GPE, DATE, NORP, PRODUCT.
List entities in the order they first appear in the text.
Return {"entities": []} if there are none.

Resume text:
"""
{text}
""""#;

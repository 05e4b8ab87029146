use crate::core::conversation::Conversation;
use crate::domain::model::ProductDetails;
use crate::utils::error::Result;

pub const CHAT_SYSTEM_PROMPT: &str = "You are a professional beauty and skincare expert from L'Oréal. \
You help users with beauty routines, skincare advice, haircare tips, makeup guidance, and fragrance recommendations. \
Keep responses helpful, friendly, and professional. \
Focus only on beauty, skincare, haircare, makeup, and fragrance topics. \
ALWAYS search the web for the latest L'Oréal product information, current beauty trends, recent product launches, \
updated ingredient science, and current pricing when providing advice. \
Use the most recent and accurate information available. \
Always cite your sources with clickable links.";

pub const ROUTINE_SYSTEM_PROMPT: &str = "You are a professional beauty and skincare expert from L'Oréal. \
Create personalized beauty routines based on the products provided. \
Give clear, step-by-step instructions and explain why each product should be used and when. \
Keep responses friendly, professional, and helpful. \
Use formatting like **bold** for headings and important points. \
ALWAYS search the web for the latest L'Oréal product information, current beauty trends, \
updated application techniques, recent ingredient research, and current product availability when creating routines. \
Ensure all advice is based on the most recent and accurate information available. \
Include citations to your sources.";

const ROUTINE_POINTS: [&str; 5] = [
    "Morning routine (if applicable)",
    "Evening routine (if applicable)",
    "Order of application",
    "Tips for best results",
    "How often to use each product",
];

/// The user turn that asks for a routine built from `products`.
pub fn routine_request(products: &[ProductDetails]) -> Result<String> {
    let products_json = serde_json::to_string(products)?;
    let points = ROUTINE_POINTS
        .iter()
        .enumerate()
        .map(|(i, point)| format!("{}. {}", i + 1, point))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "Please create a personalized beauty routine using these products: {}.\n\n\
         Include:\n{}\n\n\
         Make it easy to follow and explain the benefits of each step.",
        products_json, points
    ))
}

pub fn routine_input(request: &str) -> String {
    format!("{}\n\nUser Request: {}", ROUTINE_SYSTEM_PROMPT, request)
}

/// Follow-up questions carry the whole conversation so far.
pub fn chat_input(conversation: &Conversation) -> String {
    format!("{}\n\n{}", CHAT_SYSTEM_PROMPT, conversation.transcript())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Role;

    #[test]
    fn test_routine_request_embeds_product_json() {
        let details = vec![ProductDetails {
            name: "Revitalift Serum".to_string(),
            brand: "L'Oréal Paris".to_string(),
            category: "skincare".to_string(),
            description: "Hyaluronic acid serum".to_string(),
        }];

        let request = routine_request(&details).unwrap();
        assert!(request.starts_with(
            r#"Please create a personalized beauty routine using these products: [{"name":"Revitalift Serum","brand":"L'Oréal Paris","category":"skincare","description":"Hyaluronic acid serum"}]."#
        ));
        assert!(request.contains("Include:\n1. Morning routine (if applicable)\n"));
        assert!(request.contains("5. How often to use each product\n\n"));
        assert!(request.ends_with("explain the benefits of each step."));
    }

    #[test]
    fn test_routine_input_prefixes_system_prompt() {
        let input = routine_input("make me a routine");
        assert!(input.starts_with(ROUTINE_SYSTEM_PROMPT));
        assert!(input.ends_with("\n\nUser Request: make me a routine"));
    }

    #[test]
    fn test_chat_input_includes_transcript() {
        let mut conversation = Conversation::new();
        conversation.push(Role::User, "hello");
        let input = chat_input(&conversation);
        assert_eq!(input, format!("{}\n\nUser: hello", CHAT_SYSTEM_PROMPT));
    }
}

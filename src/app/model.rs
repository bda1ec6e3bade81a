use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{
    error::MessageError,
    header::HeaderSet,
    message::{Message, MessageParts, Scheme, SchemeVersion},
    request::Request,
    response::Response,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModelFormat {
    Json,
    JsonPretty,
    Cbor,
}

/// Structured form of a message for interchange with other tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageModel {
    Request(RequestModel),
    Response(ResponseModel),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestModel {
    pub method: String,
    pub path: String,
    pub scheme: String,
    pub version: String,
    pub headers: HeaderSet,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponseModel {
    pub status_code: u16,
    pub reason_phrase: String,
    pub scheme: String,
    pub version: String,
    pub headers: HeaderSet,
    pub body: String,
}

impl From<&Message> for MessageModel {
    fn from(value: &Message) -> Self {
        match value {
            Message::Request(request) => Self::Request(RequestModel {
                method: request.method().to_string(),
                path: request.path().to_string(),
                scheme: request.scheme().to_string(),
                version: request.scheme_version().to_string(),
                headers: request.headers().clone(),
                body: request.body().to_string(),
            }),
            Message::Response(response) => Self::Response(ResponseModel {
                status_code: response.status_code().as_u16(),
                reason_phrase: response.reason_phrase().to_string(),
                scheme: response.scheme().to_string(),
                version: response.scheme_version().to_string(),
                headers: response.headers().clone(),
                body: response.body().to_string(),
            }),
        }
    }
}

impl TryFrom<MessageModel> for Message {
    type Error = MessageError;

    fn try_from(value: MessageModel) -> Result<Self, Self::Error> {
        match value {
            MessageModel::Request(model) => {
                let parts = model_parts(&model.scheme, &model.version, model.headers, model.body)?;
                let request = Request::from_parts(model.method.as_str(), model.path, parts)?;
                Ok(Self::Request(request))
            }
            MessageModel::Response(model) => {
                let parts = model_parts(&model.scheme, &model.version, model.headers, model.body)?;
                let response = Response::from_parts(model.status_code, model.reason_phrase, parts)?;
                Ok(Self::Response(response))
            }
        }
    }
}

fn model_parts(
    scheme: &str,
    version: &str,
    headers: HeaderSet,
    body: String,
) -> Result<MessageParts, MessageError> {
    let scheme = Scheme::try_from(scheme)?;
    let scheme_version = SchemeVersion::try_from(version)?;

    Ok(MessageParts::with_headers(
        scheme,
        scheme_version,
        headers,
        body,
    ))
}

pub fn write_model<W: Write>(
    model: &MessageModel,
    format: ModelFormat,
    mut output: W,
) -> anyhow::Result<()> {
    match format {
        ModelFormat::Json => {
            serde_json::to_writer(&mut output, model)?;
            output.write_all(b"\n")?;
        }
        ModelFormat::JsonPretty => {
            serde_json::to_writer_pretty(&mut output, model)?;
            output.write_all(b"\n")?;
        }
        ModelFormat::Cbor => ciborium::into_writer(model, &mut output)?,
    }

    Ok(())
}

pub fn read_model<R: Read>(input: R, format: ModelFormat) -> anyhow::Result<MessageModel> {
    let model = match format {
        ModelFormat::Json | ModelFormat::JsonPretty => serde_json::from_reader(input)?,
        ModelFormat::Cbor => ciborium::from_reader(input)?,
    };

    Ok(model)
}

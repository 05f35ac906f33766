// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use bookproxy_core::hash::hex_sha256;
use bookproxy_core::{Error, Result};
use std::fmt::{Display, Formatter, Write};

/// CanonicalRequest is the fixed-format string AWS SigV4 hashes.
///
/// ```text
/// <method>
/// <path>
/// <query>
/// <name>:<value>        (one line per signed header)
///
/// <signed;header;names>
/// <payload hash>
/// ```
///
/// Method, path and query are taken verbatim; the caller is responsible for
/// encoding them. Header names are lower-cased, values are kept as given.
///
/// The builder refuses to guess: a signed header list that is not sorted and
/// unique, a signed name without a value, or a value that is not signed all
/// fail with [`bookproxy_core::ErrorKind::RequestInvalid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: String,
    path: String,
    query: String,
    headers: Vec<(String, String)>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Build a canonical request, hashing `body` as the payload.
    pub fn new(
        method: &str,
        path: &str,
        query: &str,
        headers: &[(&str, &str)],
        signed_headers: &[&str],
        body: &[u8],
    ) -> Result<Self> {
        Self::with_payload_hash(
            method,
            path,
            query,
            headers,
            signed_headers,
            &hex_sha256(body),
        )
    }

    /// Build a canonical request from an already computed payload hash.
    pub fn with_payload_hash(
        method: &str,
        path: &str,
        query: &str,
        headers: &[(&str, &str)],
        signed_headers: &[&str],
        payload_hash: &str,
    ) -> Result<Self> {
        if signed_headers.is_empty() {
            return Err(Error::request_invalid("signed headers must not be empty"));
        }

        let names = signed_headers
            .iter()
            .map(|v| v.to_ascii_lowercase())
            .collect::<Vec<_>>();
        if names.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::request_invalid(format!(
                "signed headers must be sorted and unique: {}",
                names.join(";")
            )));
        }

        let mut values = headers
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), *v))
            .collect::<Vec<_>>();
        values.sort_by(|a, b| a.0.cmp(&b.0));
        if values.windows(2).any(|w| w[0].0 == w[1].0) {
            return Err(Error::request_invalid("header map contains duplicate names"));
        }
        if let Some((k, _)) = values
            .iter()
            .find(|(k, _)| names.binary_search(k).is_err())
        {
            return Err(Error::request_invalid(format!(
                "header {k} is present but not signed"
            )));
        }

        let mut canonical_headers = Vec::with_capacity(names.len());
        for name in names {
            let value = match values.binary_search_by(|(k, _)| k.as_str().cmp(name.as_str())) {
                Ok(idx) => values[idx].1,
                Err(_) => {
                    return Err(Error::request_invalid(format!(
                        "signed header {name} is missing"
                    )))
                }
            };
            if value.contains(['\r', '\n']) {
                return Err(Error::request_invalid(format!(
                    "value of header {name} contains a line break"
                )));
            }
            canonical_headers.push((name, value.to_string()));
        }

        Ok(Self {
            method: method.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            headers: canonical_headers,
            payload_hash: payload_hash.to_string(),
        })
    }

    /// Signed header names joined by `;`.
    pub fn signed_headers(&self) -> String {
        self.headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Hex encoded sha256 of the payload.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.query)?;
        for (k, v) in &self.headers {
            f.write_str(k)?;
            f.write_char(':')?;
            f.write_str(v)?;
            f.write_char('\n')?;
        }
        f.write_char('\n')?;
        writeln!(f, "{}", self.signed_headers())?;
        f.write_str(&self.payload_hash)
    }
}

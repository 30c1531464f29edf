use axum::response::{Html, IntoResponse};

// Serve the generator page for the web UI
pub async fn serve_index() -> impl IntoResponse {
    // Single inline page: form state lives in the browser, rendering happens
    // server-side through the JSON API. All inputs share one debounce timer
    // so only the last edit within the window triggers a render.
    let html = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QR Studio</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1 { color: #2c3e50; text-align: center; }
        .layout { display: flex; flex-wrap: wrap; gap: 20px; }
        .card {
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 20px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
            flex: 1 1 380px;
        }
        label { display: block; margin-top: 12px; font-size: 14px; }
        input[type="text"], input[type="password"], textarea, select {
            width: 100%;
            padding: 8px;
            margin-top: 4px;
            border: 1px solid #ccc;
            border-radius: 4px;
            box-sizing: border-box;
        }
        .row { display: flex; gap: 12px; }
        .row label { flex: 1; }
        .presets { display: flex; gap: 8px; margin-top: 8px; }
        .button {
            background-color: #3498db;
            color: white;
            border: none;
            padding: 10px 15px;
            border-radius: 4px;
            cursor: pointer;
            font-size: 14px;
        }
        .button:hover { background-color: #2980b9; }
        .preset-btn { background-color: #95a5a6; }
        .preset-btn.active { background-color: #3498db; }
        #qr-container {
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 300px;
        }
        #qr-container svg { max-width: 100%; height: auto; }
        .placeholder { color: #999; text-align: center; }
        .error { color: #c0392b; text-align: center; }
        .actions { display: none; gap: 8px; justify-content: center; margin-top: 12px; }
        .char-count { font-size: 12px; color: #999; }
    </style>
</head>
<body>
    <h1>QR Studio</h1>
    <div class="layout">
        <div class="card">
            <label>Type
                <select id="qr-type">
                    <option value="text">Text / URL</option>
                    <option value="wifi">Wi-Fi network</option>
                    <option value="contact">Contact card</option>
                </select>
            </label>

            <div id="group-text">
                <label>Content
                    <textarea id="text" rows="3">https://example.com</textarea>
                </label>
                <span class="char-count" id="char-count">19 characters</span>
            </div>

            <div id="group-wifi" style="display: none;">
                <label>Network name (SSID) <input type="text" id="wifi-ssid"></label>
                <label>Password <input type="password" id="wifi-password"></label>
                <div class="row">
                    <label>Security
                        <select id="wifi-security">
                            <option value="WPA">WPA/WPA2</option>
                            <option value="WEP">WEP</option>
                            <option value="nopass">No password</option>
                        </select>
                    </label>
                    <label><input type="checkbox" id="wifi-hidden"> Hidden network</label>
                </div>
            </div>

            <div id="group-contact" style="display: none;">
                <label>Name <input type="text" id="contact-name"></label>
                <div class="row">
                    <label>Phone <input type="text" id="contact-phone"></label>
                    <label>Email <input type="text" id="contact-email"></label>
                </div>
                <div class="row">
                    <label>Company <input type="text" id="contact-company"></label>
                    <label>Website <input type="text" id="contact-website"></label>
                </div>
            </div>

            <label>Presets</label>
            <div class="presets" id="presets"></div>

            <div class="row">
                <label>Size <input type="range" id="size" min="200" max="800" step="50" value="400"></label>
                <label>Quiet zone <input type="range" id="border" min="0" max="10" value="4"></label>
            </div>
            <div class="row">
                <label>Foreground <input type="color" id="foreground" value="#000000"></label>
                <label>Background <input type="color" id="background" value="#ffffff"></label>
            </div>
            <div class="row">
                <label>Module shape
                    <select id="shape">
                        <option value="square">Square</option>
                        <option value="rounded">Rounded</option>
                        <option value="circle">Circle</option>
                    </select>
                </label>
                <label>Error correction
                    <select id="ecc">
                        <option value="LOW">Low</option>
                        <option value="MEDIUM" selected>Medium</option>
                        <option value="QUARTILE">Quartile</option>
                        <option value="HIGH">High</option>
                    </select>
                </label>
            </div>
            <div class="row">
                <label>Gradient
                    <select id="gradient">
                        <option value="none">None</option>
                        <option value="linear">Linear</option>
                        <option value="radial">Radial</option>
                    </select>
                </label>
                <label id="gradient-color-group" style="visibility: hidden;">Gradient color
                    <input type="color" id="gradient-color" value="#ef4444">
                </label>
            </div>
            <label>Logo overlay <input type="file" id="logo" accept="image/*"></label>
        </div>

        <div class="card">
            <div id="qr-container"><p class="placeholder">Your QR code will appear here</p></div>
            <div class="actions" id="actions">
                <button class="button" id="download-svg">Download SVG</button>
                <button class="button" id="download-png">Download PNG</button>
                <button class="button" id="copy">Copy</button>
            </div>
        </div>
    </div>

    <script>
        const $ = (id) => document.getElementById(id);
        let logoDataUrl = null;
        let debounceTimer = null;

        function currentStyle() {
            return {
                pixel_size: parseInt($('size').value),
                foreground: $('foreground').value,
                background: $('background').value,
                border_width: parseInt($('border').value),
                module_shape: $('shape').value,
                gradient: $('gradient').value,
                gradient_color: $('gradient-color').value,
                error_correction: $('ecc').value,
            };
        }

        function currentPayload() {
            const type = $('qr-type').value;
            if (type === 'wifi') {
                return {
                    type: 'wifi',
                    ssid: $('wifi-ssid').value,
                    password: $('wifi-password').value,
                    security: $('wifi-security').value,
                    hidden: $('wifi-hidden').checked,
                };
            }
            if (type === 'contact') {
                return {
                    type: 'contact',
                    name: $('contact-name').value,
                    phone: $('contact-phone').value,
                    email: $('contact-email').value,
                    company: $('contact-company').value,
                    website: $('contact-website').value,
                };
            }
            return { type: 'text', text: $('text').value };
        }

        function requestBody() {
            const body = { payload: currentPayload(), style: currentStyle() };
            if (logoDataUrl) body.logo = logoDataUrl;
            return body;
        }

        async function render() {
            try {
                const response = await fetch('/api/render', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(requestBody()),
                });
                const data = await response.json();
                if (!response.ok) {
                    showError(data.error || 'Failed to generate QR code');
                    return;
                }
                $('qr-container').innerHTML = data.svg;
                $('actions').style.display = 'flex';
            } catch (error) {
                showError('Failed to generate QR code: ' + error.message);
            }
        }

        function showError(message) {
            $('qr-container').innerHTML = '<p class="error">' + message + '</p>';
            $('actions').style.display = 'none';
        }

        function scheduleRender() {
            clearTimeout(debounceTimer);
            debounceTimer = setTimeout(render, 300);
        }

        function switchType() {
            const type = $('qr-type').value;
            $('group-text').style.display = type === 'text' ? 'block' : 'none';
            $('group-wifi').style.display = type === 'wifi' ? 'block' : 'none';
            $('group-contact').style.display = type === 'contact' ? 'block' : 'none';
            scheduleRender();
        }

        async function loadPresets() {
            const response = await fetch('/api/presets');
            const presets = await response.json();
            const container = $('presets');
            for (const [name, style] of Object.entries(presets)) {
                const btn = document.createElement('button');
                btn.className = 'button preset-btn' + (name === 'default' ? ' active' : '');
                btn.textContent = name;
                btn.addEventListener('click', () => {
                    document.querySelectorAll('.preset-btn').forEach(b => b.classList.remove('active'));
                    btn.classList.add('active');
                    $('size').value = style.pixel_size;
                    $('foreground').value = style.foreground;
                    $('background').value = style.background;
                    $('border').value = style.border_width;
                    $('shape').value = style.module_shape;
                    $('gradient').value = style.gradient;
                    $('gradient-color').value = style.gradient_color;
                    $('ecc').value = style.error_correction;
                    toggleGradientColor();
                    scheduleRender();
                });
                container.appendChild(btn);
            }
        }

        function toggleGradientColor() {
            $('gradient-color-group').style.visibility =
                $('gradient').value === 'none' ? 'hidden' : 'visible';
        }

        async function downloadPng() {
            const response = await fetch('/api/render/png', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(requestBody()),
            });
            if (!response.ok) {
                const data = await response.json();
                showError(data.error || 'PNG export failed');
                return;
            }
            triggerDownload(await response.blob(), 'qrcode-' + Date.now() + '.png');
        }

        function downloadSvg() {
            const svg = document.querySelector('#qr-container svg');
            if (!svg) return;
            const blob = new Blob([new XMLSerializer().serializeToString(svg)],
                { type: 'image/svg+xml;charset=utf-8' });
            triggerDownload(blob, 'qrcode-' + Date.now() + '.svg');
        }

        function triggerDownload(blob, filename) {
            const url = URL.createObjectURL(blob);
            const link = document.createElement('a');
            link.href = url;
            link.download = filename;
            document.body.appendChild(link);
            link.click();
            document.body.removeChild(link);
            URL.revokeObjectURL(url);
        }

        async function copyToClipboard() {
            try {
                const response = await fetch('/api/render/png', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(requestBody()),
                });
                if (!response.ok) throw new Error('render failed');
                const blob = await response.blob();
                await navigator.clipboard.write([new ClipboardItem({ 'image/png': blob })]);
                const btn = $('copy');
                const original = btn.textContent;
                btn.textContent = 'Copied!';
                setTimeout(() => { btn.textContent = original; }, 2000);
            } catch (error) {
                showError('Failed to copy QR code to clipboard');
            }
        }

        document.addEventListener('DOMContentLoaded', () => {
            loadPresets();
            $('qr-type').addEventListener('change', switchType);
            $('gradient').addEventListener('change', toggleGradientColor);
            $('text').addEventListener('input', () => {
                $('char-count').textContent = $('text').value.length + ' characters';
            });
            $('logo').addEventListener('change', (e) => {
                const file = e.target.files[0];
                if (!file) { logoDataUrl = null; scheduleRender(); return; }
                const reader = new FileReader();
                reader.onload = (ev) => { logoDataUrl = ev.target.result; scheduleRender(); };
                reader.readAsDataURL(file);
            });
            // Every editable control funnels into the shared debounce timer
            document.querySelectorAll('input, select, textarea').forEach(el => {
                el.addEventListener('input', scheduleRender);
                el.addEventListener('change', scheduleRender);
            });
            $('download-svg').addEventListener('click', downloadSvg);
            $('download-png').addEventListener('click', downloadPng);
            $('copy').addEventListener('click', copyToClipboard);
            render();
        });
    </script>
</body>
</html>"##;

    Html(html)
}
